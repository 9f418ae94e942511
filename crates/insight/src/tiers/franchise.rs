//! Tier columns produced by the franchise-operations reports.

use super::tier;

tier! {
    PartnerTier in "partner_tier_assessment" {
        ExcellentPartner => "Excellent Partner",
        GoodPartner => "Good Partner",
        AveragePartner => "Average Partner",
        NeedsImprovement => "Needs Improvement",
    }
}

tier! {
    RevenuePerformance in "revenue_performance" {
        TargetMet => "Revenue Target Met",
        Good => "Good Revenue Performance",
        BelowTarget => "Revenue Below Target",
    }
}

tier! {
    IssueStatus in "issue_status" {
        NoCriticalIssues => "No Critical Issues",
        MinorIssues => "Minor Issues",
        MultipleCriticalIssues => "Multiple Critical Issues",
    }
}

tier! {
    PerformanceClassification in "performance_classification" {
        TopPerformer => "Top Performer",
        StandardPerformer => "Standard Performer",
        ImprovementNeeded => "Performance Improvement Needed",
    }
}

tier! {
    ComplianceStatus in "compliance_status" {
        FullyCompliant => "Fully Compliant",
        MinorIssues => "Minor Compliance Issues",
        AttentionNeeded => "Compliance Attention Needed",
    }
}

tier! {
    ContractStatus in "contract_status" {
        RenewalUrgent => "Contract Renewal Urgent",
        RenewalDueSoon => "Contract Renewal Due Soon",
        Stable => "Contract Status Stable",
    }
}

tier! {
    ExpansionAssessment in "expansion_assessment" {
        PrimeCandidate => "Prime Expansion Candidate",
        GoodPotential => "Good Expansion Potential",
        ModeratePotential => "Moderate Expansion Potential",
        LimitedPotential => "Limited Expansion Potential",
    }
}

tier! {
    OpportunityClass in "opportunity_classification" {
        Premium => "Premium Opportunity",
        HighPriority => "High Priority Opportunity",
        MediumPriority => "Medium Priority Opportunity",
        LowPriority => "Low Priority Opportunity",
    }
}

tier! {
    Timeline in "timeline_assessment" {
        FastTrack => "Fast Track",
        Standard => "Standard Timeline",
        Extended => "Extended Timeline",
        LongTerm => "Long-term Project",
    }
}

tier! {
    SupportTier in "support_performance_tier" {
        Excellent => "Excellent Support Performance",
        Good => "Good Support Performance",
        Standard => "Standard Support Performance",
        ImprovementNeeded => "Support Improvement Needed",
    }
}

tier! {
    TicketUrgency in "ticket_urgency_status" {
        CriticalDelay => "Critical Delay",
        HighPriorityDelay => "High Priority Delay",
        EscalationRequired => "Escalation Required",
        Normal => "Normal Processing",
    }
}

tier! {
    CostImpact in "cost_impact_level" {
        High => "High Cost Impact",
        Moderate => "Moderate Cost Impact",
        Low => "Low Cost Impact",
        NoImpact => "No Financial Impact",
    }
}
