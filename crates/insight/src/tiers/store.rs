//! Tier columns produced by the store-performance reports.

use super::tier;

tier! {
    ConversionStatus in "conversion_status" {
        Excellent => "Excellent",
        Good => "Good",
        Fair => "Fair",
        Poor => "Poor",
    }
}

tier! {
    StoreCategory in "store_category" {
        StarStore => "Star Store",
        HighPerformer => "High Performer",
        EfficientStore => "Efficient Store",
        TargetAchiever => "Target Achiever",
        NeedsAttention => "Needs Attention",
        AveragePerformer => "Average Performer",
    }
}

tier! {
    /// Staff productivity bracket.
    StaffTier in "performance_tier" {
        Top10 => "Top 10%",
        Top25 => "Top 25%",
        AboveAverage => "Above Average",
        DevelopmentNeeded => "Development Needed",
    }
}

tier! {
    TrainingStatus in "training_status" {
        Certified => "Certified",
        TrainingRequired => "Training Required",
    }
}

tier! {
    Specialty in "specialty" {
        SuitSpecialist => "Suit Specialist",
        AlterationExpert => "Alteration Expert",
        CustomerChampion => "Customer Champion",
        BalancedPerformer => "Balanced Performer",
    }
}

tier! {
    ConversionTier in "conversion_tier" {
        Excellent => "Excellent Converter",
        Good => "Good Converter",
        Average => "Average Converter",
        Poor => "Poor Converter",
    }
}

tier! {
    PerformancePattern in "performance_pattern" {
        WeekendPerformer => "Weekend Performer",
        WeekdayPerformer => "Weekday Performer",
        Balanced => "Balanced Performance",
    }
}

tier! {
    PerformanceLevel in "performance_level" {
        Exceeding => "Exceeding Targets",
        Meeting => "Meeting Targets",
        Below => "Below Targets",
        Missing => "Missing Targets",
    }
}

tier! {
    TrendDirection in "trend_direction" {
        Improving => "Improving",
        Declining => "Declining",
        Stable => "Stable",
    }
}

tier! {
    FocusArea in "primary_focus_area" {
        RevenueGeneration => "revenue generation",
        ConversionTactics => "conversion tactics",
        BasketValue => "basket value",
        FormalWearSales => "formal wear sales",
        MaintainPerformance => "Maintain performance",
    }
}
