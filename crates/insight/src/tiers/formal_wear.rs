//! Tier columns produced by the formal-wear reports.

use super::tier;

tier! {
    /// Suit sales ranking bracket.
    PerformanceTier in "performance_tier" {
        StarPerformer => "Star Performer",
        RevenueChampion => "Revenue Champion",
        VolumeLeader => "Volume Leader",
        MarginExcellence => "Margin Excellence",
        CountryLeader => "Country Leader",
        AboveAverage => "Above Average",
        GrowthOpportunity => "Growth Opportunity",
    }
}

tier! {
    FitQuality in "fit_quality" {
        PerfectFit => "Perfect Fit",
        GoodFit => "Good Fit",
        CriticalFitProblem => "Critical Fit Problem",
        FitIssues => "Fit Issues",
    }
}

tier! {
    BundleStatus in "bundle_status" {
        BundleSuperstar => "Bundle Superstar",
        CategoryChampion => "Category Champion",
        HighPerformer => "High Performer",
        VolumeDriver => "Volume Driver",
        MarginLeader => "Margin Leader",
        StandardBundle => "Standard Bundle",
    }
}

tier! {
    ValueTier in "value_tier" {
        UltraValue => "Ultra Value",
        HighValue => "High Value",
        GoodValue => "Good Value",
        StandardValue => "Standard Value",
    }
}

tier! {
    MarketCoverage in "market_coverage" {
        UniversalAppeal => "Universal Appeal",
        BroadMarket => "Broad Market",
        DualMarket => "Dual Market",
        NicheFocus => "Niche Focus",
    }
}

tier! {
    DemandStatus in "demand_status" {
        PerfectMatch => "Perfect Match",
        HotSize => "Hot Size",
        HighDemand => "High Demand",
        StandardDemand => "Standard Demand",
        LowDemand => "Low Demand",
    }
}

tier! {
    FitAssessment in "fit_assessment" {
        PerfectFit => "Perfect Fit",
        GoodFit => "Good Fit",
        FitChallenges => "Fit Challenges",
        CriticalFitIssues => "Critical Fit Issues",
    }
}

tier! {
    SatisfactionTier in "satisfaction_tier" {
        ExceptionalSatisfaction => "Exceptional Satisfaction",
        HighSatisfaction => "High Satisfaction",
        Acceptable => "Acceptable",
        LowSatisfaction => "Low Satisfaction",
    }
}

tier! {
    ReturnRisk in "return_risk" {
        MinimalReturns => "Minimal Returns",
        LowReturns => "Low Returns",
        ModerateReturns => "Moderate Returns",
        HighReturnRisk => "High Return Risk",
    }
}

tier! {
    DemandLevel in "demand_level" {
        ExplosiveDemand => "Explosive Demand",
        HighDemand => "High Demand",
        StrongDemand => "Strong Demand",
        ModerateDemand => "Moderate Demand",
        LowDemand => "Low Demand",
    }
}

tier! {
    MarketType in "market_type" {
        PremiumMarket => "Premium Market",
        ValueMarket => "Value Market",
        PriceSensitive => "Price Sensitive",
    }
}

tier! {
    ProductDiversity in "product_diversity" {
        HighFashionDiversity => "High Fashion Diversity",
        BalancedSelection => "Balanced Selection",
        StandardRange => "Standard Range",
        LimitedOptions => "Limited Options",
    }
}

tier! {
    MarketStability in "market_stability" {
        VeryStable => "Very Stable",
        Stable => "Stable",
        Variable => "Variable",
        Volatile => "Volatile",
    }
}

tier! {
    EventInfluence in "event_influence" {
        EventDriven => "Event Driven",
        ModerateEvents => "Moderate Events",
        SomeEvents => "Some Events",
        RegularSeason => "Regular Season",
    }
}

tier! {
    /// Cross-dimensional store assessment.
    OverallPerformance in "overall_performance" {
        Excellence => "Excellence",
        HighPerformance => "High Performance",
        GoodPerformance => "Good Performance",
        ImprovementNeeded => "Improvement Needed",
    }
}

tier! {
    OperationalComplexity in "operational_complexity" {
        HighComplexity => "High Complexity",
        ModerateComplexity => "Moderate Complexity",
        StandardOperations => "Standard Operations",
    }
}
