//! Tier columns produced by the inventory reports. Labels are Turkish.

use super::tier;

tier! {
    ReplenishmentUrgency in "urgency_level" {
        VeryCritical => "ÇOK KRİTİK",
        Critical => "KRİTİK",
        Warning => "UYARI",
        Soon => "YAKINDA",
        Sufficient => "YETERLİ",
    }
}

tier! {
    OrderAction in "action_required" {
        OrderNow => "ACİL SİPARİŞ VER",
        OrderToday => "BUGÜN SİPARİŞ VER",
        OrderThisWeek => "BU HAFTA SİPARİŞ",
        Monitor => "İZLEMEDE TUT",
    }
}

tier! {
    StockoutRisk in "risk_level" {
        Imminent => "Hemen tükenecek",
        Critical => "Kritik risk",
        High => "Yüksek risk",
        Weekly => "Haftalık risk",
        Sufficient => "Stok yeterli",
    }
}

tier! {
    WorstCase in "worst_case" {
        Critical => "En kötü senaryoda kritik",
        Safe => "Senaryo güvenli",
    }
}

tier! {
    DemandOutlook in "demand_level" {
        High => "Yüksek Talep Bekleniyor",
        Moderate => "Orta Artış Bekleniyor",
        Normal => "Normal Talep",
    }
}

tier! {
    RestockAdvice in "recommendation" {
        Restock => "Stok takviyesi önerilir",
        Check => "Stok seviyesini kontrol edin",
        Sufficient => "Mevcut stok yeterli",
    }
}

tier! {
    StockStatus in "stock_status" {
        Dead => "ÖLMÜŞ STOK",
        Excess => "FAZLA STOK",
        High => "Yüksek stok",
        CriticalLow => "KRİTİK DÜŞÜK",
        Low => "Düşük stok",
        Optimal => "OPTİMAL",
        Watch => "İzlemede",
    }
}

tier! {
    StoreStockStatus in "store_status" {
        Critical => "KRİTİK DURUM",
        HighRisk => "Yüksek risk",
        Attention => "Dikkat gerekli",
        Stockouts => "Stoksuzluk var",
        Normal => "Normal",
    }
}

tier! {
    AllocationReason in "allocation_reason" {
        HighDemand => "Yüksek talep ve trend",
        Normal => "Normal talep",
        Medium => "Orta seviye talep",
        Low => "Düşük talep",
    }
}

tier! {
    TransferPriority in "priority" {
        High => "Yüksek öncelik",
        Medium => "Orta öncelik",
        Low => "Düşük öncelik",
    }
}

tier! {
    TransferType in "transfer_type" {
        InterCity => "Şehirler arası",
        InCity => "Şehir içi",
    }
}
