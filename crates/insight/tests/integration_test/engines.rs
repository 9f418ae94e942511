//! One realistic report per engine, run through analyzer and formatter.

use atelier_core::Row;
use atelier_insight::*;
use atelier_intent::{Category, Engine};

use crate::common::context;

#[test]
fn franchise_partner_report_in_turkish() {
    let rows = vec![
        Row::new()
            .with("franchise_partner", "Alfa Giyim")
            .with("partner_tier_assessment", "🏆 Excellent Partner")
            .with("revenue_performance", "✅ Revenue Target Met")
            .with("issue_status", "✅ No Critical Issues")
            .with("avg_performance_score", 96)
            .with("stores_managed", 6)
            .with("total_critical_issues", 0),
        Row::new()
            .with("franchise_partner", "Beta Tekstil")
            .with("partner_tier_assessment", "⚠️ Needs Improvement")
            .with("revenue_performance", "🔴 Revenue Below Target")
            .with("issue_status", "🔴 Multiple Critical Issues")
            .with("avg_performance_score", 64)
            .with("stores_managed", 3)
            .with("total_critical_issues", 5),
    ];
    let ctx = context(Engine::FranchiseOps, "partner performansı nasıl", None);
    assert_eq!(ctx.detected_category, Category::PartnerPerformance);

    let out = analyze(&rows, ctx.detected_category, &ctx, &ThresholdConfig::default());
    assert_eq!(
        out.insights,
        vec![
            "🏆 En başarılı partner: Alfa Giyim (Skor: 96)",
            "📊 Ortalama partner performans skoru: 80.0/100",
        ]
    );
    assert_eq!(
        out.alerts,
        vec![
            "⚠️ 1 partner gelişim desteği gerektiriyor",
            "🔴 1 partner gelir hedeflerinin altında",
            "🚨 1 partnerde çoklu kritik sorunlar tespit edildi",
        ]
    );
    assert_eq!(out.recommendations.len(), 3);
    assert_eq!(out.metrics_summary["total_stores_managed"], 9.0);

    let report = format(&out, &ctx);
    assert_eq!(report.insights[0], "📊 ANA BULGULAR");
    assert_eq!(report.alerts[0], "⚠️ UYARILAR");
    assert_eq!(report.recommendations[1], "🔴 Düşük performanslı partnerler için gelişim programları başlatın");
}

#[test]
fn store_daily_report() {
    let rows = vec![
        Row::new()
            .with("store_id", "SV001")
            .with("daily_revenue_rank", 1)
            .with("net_revenue", 45_230.0)
            .with("transactions", 51)
            .with("conversion_rate", 30.0)
            .with("store_entries", 170)
            .with("conversion_status", "🟢 Excellent")
            .with("week_over_week_change", 12.5)
            .with("suit_percentage", 58.0),
        Row::new()
            .with("store_id", "SV002")
            .with("daily_revenue_rank", 2)
            .with("net_revenue", 21_000.0)
            .with("transactions", 30)
            .with("conversion_rate", 18.0)
            .with("store_entries", 166)
            .with("conversion_status", "🔴 Poor")
            .with("week_over_week_change", -14.0)
            .with("weather_impact", "rain"),
    ];
    let ctx = context(Engine::StorePerformance, "bugünkü mağaza performansı", Some("daily_performance"));
    let out = analyze(&rows, Category::DailyPerformance, &ctx, &ThresholdConfig::default());

    assert_eq!(out.insights[0], "🏆 Günün lideri: SV001 - 45,230 TL");
    assert!(out.insights.contains(&"🎯 1 mağaza mükemmel dönüşüm oranı (>%28) yakaladı".to_string()));
    assert!(out.insights.contains(&"🌧️ 1 mağaza olumsuz hava koşullarından etkilendi".to_string()));
    assert_eq!(out.alerts, vec!["📉 1 mağaza geçen haftaya göre %10+ düşüş yaşadı"]);
    assert_eq!(out.metrics_summary["total_revenue"], 66_230.0);
    assert_eq!(out.metrics_summary["unique_stores"], 2.0);
    assert_eq!(out.metrics_summary["avg_conversion"], 24.0);

    let report = format(&out, &ctx);
    assert_eq!(
        report.executive_summary,
        "🎯 YÖNETİCİ ÖZETİ | Toplam Gelir: 66,230 TL"
    );
}

#[test]
fn formal_wear_seasonal_report_in_english() {
    let rows = vec![
        Row::new()
            .with("occasion_type", "Wedding")
            .with("country", "Turkey")
            .with("avg_demand_index", 9.6)
            .with("demand_level", "🚀 Explosive Demand")
            .with("market_type", "💎 Premium Market")
            .with("event_influence", "🎉 Event Driven")
            .with("trending_colors", "Navy, Ivory"),
        Row::new()
            .with("occasion_type", "Business")
            .with("country", "Russia")
            .with("avg_demand_index", 7.1)
            .with("demand_level", "📊 Moderate Demand")
            .with("market_type", "💸 Price Sensitive")
            .with("market_stability", "⚡ Volatile")
            .with("trending_colors", "Navy"),
    ];
    let ctx = context(Engine::FormalWear, "seasonal wedding demand trend", None);
    assert_eq!(ctx.detected_category, Category::SeasonalTrends);

    let out = analyze(&rows, Category::SeasonalTrends, &ctx, &ThresholdConfig::default());
    assert_eq!(
        &out.insights[..4],
        &[
            "🚀 Explosive demand detected:",
            "  • Wedding in Turkey (Index: 9.6)",
            "💎 Premium markets: Turkey",
            "💸 Price-sensitive markets: Russia",
        ]
    );
    assert!(out.insights.contains(&"🎨 Trending colors: Navy, Ivory".to_string()));
    assert_eq!(out.alerts, vec!["⚡ 1 volatile market segments detected"]);
    assert_eq!(out.metrics_summary["event_driven"], 1.0);
}

#[test]
fn inventory_replenishment_report() {
    let rows = vec![
        Row::new()
            .with("store_id", "VKK001")
            .with("store_name", "Vakko Nişantaşı")
            .with("product_name", "Kaşmir Kaban")
            .with("size", "M")
            .with("days_remaining", 1.2)
            .with("suggested_order_qty", 40)
            .with("urgency_level", "🔴 ÇOK KRİTİK")
            .with("action_required", "🚨 ACİL SİPARİŞ VER!"),
        Row::new()
            .with("store_id", "VKK003")
            .with("store_name", "Vakko İzmir")
            .with("product_name", "Yün Mont")
            .with("size", "L")
            .with("days_remaining", 6.0)
            .with("suggested_order_qty", 20)
            .with("urgency_level", "🟡 YAKINDA")
            .with("action_required", "BU HAFTA SİPARİŞ"),
    ];
    let ctx = context(Engine::Inventory, "hangi ürünler bitecek, sipariş önerisi", Some("stock_replenishment"));
    let out = analyze(&rows, Category::StockReplenishment, &ctx, &ThresholdConfig::default());

    assert_eq!(out.alerts[0], "🔴 1 ürün 3 gün içinde tükenecek");
    assert_eq!(out.alerts[1], "🚨 1 ürün tedarik süresinden önce tükenecek");
    assert!(out.insights.contains(&"  • Vakko Nişantaşı - Kaşmir Kaban M: 1.2 gün kaldı".to_string()));
    assert!(out.insights.contains(&"📅 1 ürün bu hafta sipariş gerektiriyor".to_string()));
    assert!(out.insights.contains(&"📦 Önerilen toplam sipariş: 60 adet (2 mağaza)".to_string()));
    assert_eq!(out.metrics_summary["total_order_qty"], 60.0);

    let report = format(&out, &ctx);
    assert_eq!(report.insights[0], "📊 ANA BULGULAR");
}

#[test]
fn inventory_allocation_report_compares_with_erp() {
    let mut rows: Vec<Row> = [("VKK001", "Vakko Nişantaşı", 45.0, 18.0), ("VKK002", "Vakko Ankara", 30.0, 12.0), ("VKK003", "Vakko İzmir", 25.0, 10.0)]
        .into_iter()
        .map(|(id, name, score, daily)| {
            Row::new()
                .with("store_id", id)
                .with("store_name", name)
                .with("allocation_score", score)
                .with("avg_daily_sales_30d", daily)
                .with("requested_qty", 1000)
        })
        .collect();
    prepare(Category::Allocation, &mut rows);
    let total: f64 = rows.iter().map(|r| r.number_or_zero("ai_recommended_qty")).sum();
    assert_eq!(total, 1000.0);

    let ctx = context(Engine::Inventory, "1000 adet kaban dağıtımı", Some("allocation"));
    let out = analyze(&rows, Category::Allocation, &ctx, &ThresholdConfig::default());

    assert_eq!(out.insights[0], "🎯 1,000 adet 3 mağazaya talep skoruna göre dağıtıldı");
    assert_eq!(out.insights[1], "🏆 En yüksek pay: Vakko Nişantaşı - 450 adet");
    assert_eq!(out.metrics_summary["total_erp_allocation"], 1000.0);
    assert!(out.metrics_summary["ai_efficiency_score"] >= out.metrics_summary["erp_efficiency_score"]);
}
