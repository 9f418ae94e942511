//! Canned follow-up questions per category.

use crate::category::Category;

/// Upper bound on follow-ups attached to a context.
pub const MAX_FOLLOWUPS: usize = 3;

/// Follow-up questions for `category`, at most [`MAX_FOLLOWUPS`].
pub fn followups(category: Category) -> Vec<String> {
    let canned: &[&str] = match category {
        Category::SuitSales => &[
            "En karlı suit kategorisi hangisi?",
            "Hangi mağaza en yüksek suit satışı yapıyor?",
            "Suit satışlarında ülke karşılaştırması",
        ],
        Category::BundleAnalysis => &[
            "En popüler bundle kombinasyonu nedir?",
            "Bundle attach rate analizi",
            "Bundle müşteri tasarruf analizi",
        ],
        Category::SizeAnalysis => &[
            "En çok iade edilen bedenler hangileri?",
            "Beden bazlı müşteri memnuniyeti",
            "Tadilat gerektirmeyen bedenler",
        ],
        Category::SeasonalTrends => &[
            "Sezonluk renk trendleri",
            "En yüksek talep gören sezon",
            "Fiyat hassasiyeti analizi",
        ],
        Category::CrossAnalysis => &[
            "Mağaza sağlık skoru karşılaştırması",
            "Ülkeler arası marj farkı",
            "En karmaşık operasyona sahip mağazalar",
        ],
        Category::Predictive => &[
            "Gelecek sezon talep tahmini",
            "Hangi suit tipi büyüme potansiyeli taşıyor?",
            "Beden bazlı stok ihtiyacı öngörüsü",
        ],
        Category::Anomaly => &[
            "Beklenmedik iade artışı olan mağazalar",
            "Tadilat oranında sapma gösteren bedenler",
            "Olağan dışı satış günleri",
        ],
        Category::PartnerPerformance => &[
            "En başarılı franchise partnerleri kimler?",
            "Gelir hedefinin altında kalan partnerler",
            "Partner memnuniyet skorları",
        ],
        Category::StoreNetwork => &[
            "Bölge bazlı mağaza dağılımı",
            "Uygunluk sorunu olan mağazalar",
            "Sözleşme yenilemesi yaklaşan mağazalar",
        ],
        Category::ExpansionAnalysis => &[
            "En yüksek ROI beklenen fırsatlar",
            "Hızlı açılabilecek lokasyonlar",
            "Ülke bazlı yatırım ihtiyacı",
        ],
        Category::SupportTickets => &[
            "Çözüm süresi en uzun talepler",
            "Kritik gecikmedeki destek talepleri",
            "Maliyet etkisi yüksek sorunlar",
        ],
        Category::DailyPerformance => &[
            "Dünkü en iyi mağaza hangisi?",
            "Bu haftanın dönüşüm oranı",
            "Günlük hedef gerçekleşmesi",
        ],
        Category::StoreComparison => &[
            "Franchise ve kendi mağazalarımızın karşılaştırması",
            "Ülke bazlı ortalama gelir",
            "En verimli mağazalar",
        ],
        Category::StaffAnalysis => &[
            "En iyi satış danışmanları kimler?",
            "Eğitim gereken personel",
            "Rol bazlı saatlik satış",
        ],
        Category::TrafficConversion => &[
            "Hafta sonu dönüşüm oranları",
            "Hava durumunun trafiğe etkisi",
            "AVM trafik yakalama oranı",
        ],
        Category::KpiTracking => &[
            "Hedefin üzerindeki mağazalar",
            "Hedefi kaçıran mağazalar için odak alanları",
            "Yükselen ve düşen mağazalar",
        ],
        Category::TrendAnalysis => &[
            "Son 30 günün gelir değişimi",
            "Haftalık büyüme gösteren mağazalar",
            "Düşüş trendindeki mağazalar",
        ],
        Category::RegionalPerformance => &[
            "Ülke bazlı mağaza performansı",
            "Şehir bazlı gelir karşılaştırması",
            "En güçlü bölge hangisi?",
        ],
        Category::FranchiseAnalysis => &[
            "Franchise mağazaların ortalama geliri",
            "Sahiplik tipine göre dönüşüm oranı",
            "En başarılı bayi mağazaları",
        ],
        Category::HourlyPatterns => &[
            "Günün en yoğun saatleri",
            "Saatlik dönüşüm deseni",
            "Yoğun saatlerde personel ihtiyacı",
        ],
        Category::WeekendAnalysis => &[
            "Hafta sonu performansı güçlü mağazalar",
            "Cumartesi ve pazar trafiği",
            "Hafta içi ile hafta sonu karşılaştırması",
        ],
        Category::StockReplenishment => &[
            "Hangi mağazanın stokları 5 günden önce bitecek?",
            "Bugün verilmesi gereken siparişler",
            "Öncelikli replenishment listesi",
        ],
        Category::StockoutPrediction => &[
            "En kötü senaryoda tükenecek ürünler",
            "Önümüzdeki 7 günün stoksuzluk riski",
            "Tükenme tarihi en yakın bedenler",
        ],
        Category::DemandForecast => &[
            "Soğuk havada mont talebi nasıl değişir?",
            "Yüksek talep beklenen mağazalar",
            "Stok takviyesi önerilen mağazalar",
        ],
        Category::InventoryOptimization => &[
            "Ölü stok hangi mağazalarda?",
            "Fazla stok transfer önerileri",
            "Aylık stok elde tutma maliyeti",
        ],
        Category::StockAlerts => &[
            "Kritik durumdaki mağazalar",
            "Stoksuz ürünlerin listesi",
            "Bugün sipariş verilmesi gereken mağazalar",
        ],
        Category::Allocation => &[
            "1000 adet için mağaza bazlı dağıtım önerisi",
            "AI ve ERP dağıtımının verimlilik karşılaştırması",
            "Talep skoru en yüksek mağazalar",
        ],
        Category::StockTransfer => &[
            "Şehir içi transfer fırsatları",
            "Yüksek öncelikli transferler",
            "Fazla stoklu mağazalar hangileri?",
        ],
    };

    canned
        .iter()
        .take(MAX_FOLLOWUPS)
        .map(|s| s.to_string())
        .collect()
}
