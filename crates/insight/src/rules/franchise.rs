//! Franchise-operations rules. Output is Turkish.

use super::{distinct_count, mean_all, sum, where_number, Rule, RuleInput, RuleResult};
use crate::fmt::{fixed, grouped, round1};
use crate::outcome::Findings;
use crate::tiers::franchise::*;

pub(super) const PARTNER_PERFORMANCE: &[Rule] = &[
    Rule { name: "top_partner", run: top_partner },
    Rule { name: "partner_development", run: partner_development },
    Rule { name: "revenue_below_target", run: revenue_below_target },
    Rule { name: "critical_issues", run: critical_issues },
    Rule { name: "partner_summary", run: partner_summary },
];

pub(super) const STORE_NETWORK: &[Rule] = &[
    Rule { name: "network_coverage", run: network_coverage },
    Rule { name: "compliance", run: compliance },
    Rule { name: "contract_renewals", run: contract_renewals },
    Rule { name: "prime_expansion", run: prime_expansion },
    Rule { name: "network_summary", run: network_summary },
];

pub(super) const EXPANSION_ANALYSIS: &[Rule] = &[
    Rule { name: "best_opportunity", run: best_opportunity },
    Rule { name: "investment", run: investment },
    Rule { name: "fast_track", run: fast_track },
    Rule { name: "expansion_summary", run: expansion_summary },
];

pub(super) const SUPPORT_TICKETS: &[Rule] = &[
    Rule { name: "support_tiers", run: support_tiers },
    Rule { name: "ticket_escalations", run: ticket_escalations },
    Rule { name: "resolution", run: resolution },
    Rule { name: "support_summary", run: support_summary },
];

// ── Partner performance ─────────────────────────────────────────────

fn top_partner(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    if let Some(top) = input.tiers.rows_in(PartnerTier::ExcellentPartner).first() {
        out.insight(format!(
            "🏆 En başarılı partner: {} (Skor: {})",
            top.require_text("franchise_partner")?,
            top.require_text("avg_performance_score")?,
        ));
    }
    Ok(out)
}

fn partner_development(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let weak = input.tiers.count(PartnerTier::NeedsImprovement);
    if weak > 0 {
        out.alert(format!("⚠️ {weak} partner gelişim desteği gerektiriyor"));
        out.recommend("Düşük performanslı partnerler için gelişim programları başlatın");
    }
    Ok(out)
}

fn revenue_below_target(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let below = input.tiers.count(RevenuePerformance::BelowTarget);
    if below > 0 {
        out.alert(format!("🔴 {below} partner gelir hedeflerinin altında"));
        out.recommend("Gelir hedeflerinin altındaki partnerlerle birebir review yapın");
    }
    Ok(out)
}

fn critical_issues(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let critical = input.tiers.count(IssueStatus::MultipleCriticalIssues);
    if critical > 0 {
        out.alert(format!("🚨 {critical} partnerde çoklu kritik sorunlar tespit edildi"));
        out.recommend("Kritik sorunları öncelikle çözüme kavuşturun");
    }
    Ok(out)
}

fn partner_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let average = mean_all(input.rows, "avg_performance_score");
    out.insight(format!("📊 Ortalama partner performans skoru: {}/100", fixed(average, 1)));
    let excellent = input.thresholds.franchise.performance_score_excellent;
    if !input.rows.is_empty() && average >= excellent {
        out.insight(format!("🌟 Partner ağı mükemmellik eşiğinin üzerinde (≥{})", fixed(excellent, 0)));
    }
    out.metric("unique_partners", distinct_count(input.rows, "franchise_partner") as f64);
    out.metric("avg_performance_score", round1(average));
    out.metric("total_stores_managed", sum(input.rows, "stores_managed"));
    out.metric("total_critical_issues", sum(input.rows, "total_critical_issues"));
    Ok(out)
}

// ── Store network ───────────────────────────────────────────────────

fn network_coverage(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    out.insight(format!(
        "🌍 Analiz edilen bölge sayısı: {}",
        distinct_count(input.rows, "region")
    ));
    let top = input.tiers.count(PerformanceClassification::TopPerformer);
    if top > 0 {
        out.insight(format!("🏆 {top} mağaza top performer kategorisinde"));
    }
    Ok(out)
}

fn compliance(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let issues = input.tiers.count(ComplianceStatus::AttentionNeeded);
    if issues > 0 {
        out.alert(format!("🔴 {issues} mağaza uygunluk sorunu yaşıyor"));
        out.recommend("Uygunluk sorunları olan mağazalar için acil düzeltici eylemler alın");
    }
    Ok(out)
}

fn contract_renewals(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let urgent = input.tiers.count(ContractStatus::RenewalUrgent);
    if urgent > 0 {
        out.alert(format!("⏰ {urgent} mağaza kontratı acil yenileme gerektiriyor"));
        out.recommend("Acil kontrat yenilemeleri için partner görüşmeleri planlayın");
    }
    Ok(out)
}

fn prime_expansion(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let prime = input.tiers.count(ExpansionAssessment::PrimeCandidate);
    if prime > 0 {
        out.insight(format!("🚀 {prime} mağaza birinci sınıf genişleme adayı"));
        out.recommend("Prime expansion adayları ile genişleme planları geliştirin");
    }
    Ok(out)
}

fn network_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    out.metric("total_stores", distinct_count(input.rows, "store_id") as f64);
    out.metric("unique_regions", distinct_count(input.rows, "region") as f64);
    out.metric("unique_countries", distinct_count(input.rows, "country") as f64);
    out.metric("avg_compliance_score", round1(mean_all(input.rows, "compliance_score")));
    Ok(out)
}

// ── Expansion ───────────────────────────────────────────────────────

fn best_opportunity(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let premium = input.tiers.rows_in(OpportunityClass::Premium);
    if let Some(top) = premium.first() {
        out.insight(format!(
            "🚀 En iyi fırsat: {}, {} (ROI: %{})",
            top.require_text("target_city")?,
            top.require_text("target_country")?,
            top.require_text("roi_projection_pct")?,
        ));
    }
    let priority = premium.len() + input.tiers.count(OpportunityClass::HighPriority);
    out.insight(format!("⭐ {priority} yüksek öncelikli genişleme fırsatı"));
    Ok(out)
}

fn investment(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    out.insight(format!(
        "💰 Toplam yatırım gereksinimi: ${}",
        grouped(sum(input.rows, "investment_required_usd"))
    ));
    let major = input.thresholds.franchise.investment_major;
    let large = where_number(input.rows, "investment_required_usd", |usd| usd >= major);
    if !large.is_empty() {
        out.insight(format!(
            "🏗️ {} fırsat büyük yatırım gerektiriyor (≥${})",
            large.len(),
            grouped(major)
        ));
        out.recommend("Büyük yatırımlı fırsatlar için aşamalı finansman planı hazırlayın");
    }
    out.insight(format!(
        "📈 Ortalama ROI projeksiyonu: %{}",
        fixed(mean_all(input.rows, "roi_projection_pct"), 1)
    ));
    Ok(out)
}

fn fast_track(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let fast = input.tiers.count(Timeline::FastTrack);
    if fast > 0 {
        out.insight(format!("⚡ {fast} fırsat hızlı implementasyon için uygun"));
        out.recommend("Fast track fırsatları öncelikle değerlendirin");
    }
    Ok(out)
}

fn expansion_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    out.metric("total_opportunities", input.rows.len() as f64);
    out.metric("target_countries", distinct_count(input.rows, "target_country") as f64);
    out.metric("total_investment_required", sum(input.rows, "investment_required_usd"));
    out.metric("avg_roi_projection", round1(mean_all(input.rows, "roi_projection_pct")));
    Ok(out)
}

// ── Support tickets ─────────────────────────────────────────────────

fn support_tiers(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let excellent = input.tiers.count(SupportTier::Excellent);
    let weak = input.tiers.count(SupportTier::ImprovementNeeded);
    if excellent > 0 {
        out.insight(format!("🏆 {excellent} partner mükemmel destek performansı gösteriyor"));
    }
    if weak > 0 {
        out.alert(format!("⚠️ {weak} partner destek iyileştirmesi gerektiriyor"));
        out.recommend("Destek süreçlerini optimize edin ve yanıt sürelerini kısaltın");
    }
    Ok(out)
}

fn ticket_escalations(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let delayed = input.tiers.count(TicketUrgency::CriticalDelay);
    let costly = input.tiers.count(CostImpact::High);
    if delayed > 0 {
        out.alert(format!("🚨 {delayed} kritik ticket gecikme yaşıyor"));
        out.recommend("Kritik ticket'lar için acil müdahale protokolü başlatın");
    }
    if costly > 0 {
        out.alert(format!("💰 {costly} ticket yüksek maliyet etkisi yaratıyor"));
    }
    Ok(out)
}

fn resolution(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    let satisfaction = mean_all(input.rows, "partner_avg_satisfaction");
    out.insight(format!(
        "⏱️ Ortalama çözüm süresi: {} saat",
        fixed(mean_all(input.rows, "partner_avg_resolution_time"), 1)
    ));
    out.insight(format!("⭐ Ortalama destek memnuniyeti: {}/5.0", fixed(satisfaction, 1)));
    let target = input.thresholds.franchise.satisfaction_target;
    if !input.rows.is_empty() && satisfaction < target {
        out.alert(format!("😟 Destek memnuniyeti hedefin altında (<{})", fixed(target, 1)));
        out.recommend("Düşük memnuniyetli ticket'ların kök neden analizini yapın");
    }
    Ok(out)
}

fn support_summary(input: &RuleInput<'_>) -> RuleResult {
    let mut out = Findings::new();
    out.metric("total_tickets", input.rows.len() as f64);
    out.metric("unique_partners", distinct_count(input.rows, "franchise_partner") as f64);
    out.metric("avg_resolution_time", round1(mean_all(input.rows, "partner_avg_resolution_time")));
    out.metric("resolution_rate", round1(mean_all(input.rows, "resolution_rate_pct")));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thresholds::ThresholdConfig;
    use crate::tiers::TierIndex;
    use atelier_core::Row;
    use atelier_intent::{Category, Engine, QueryContext, Registry};

    fn run(rule: fn(&RuleInput<'_>) -> RuleResult, category: Category, rows: &[Row]) -> RuleResult {
        let registry = Registry::builtin(Engine::FranchiseOps).unwrap();
        let context = QueryContext::build(&registry, "", Some(category.as_str()));
        let thresholds = ThresholdConfig::default();
        let tiers = TierIndex::new(rows);
        let input = RuleInput {
            rows,
            tiers: &tiers,
            category,
            context: &context,
            thresholds: &thresholds,
        };
        rule(&input)
    }

    #[test]
    fn top_partner_is_first_excellent_row() {
        let rows = vec![
            Row::new()
                .with("partner_tier_assessment", "⚠️ Needs Improvement")
                .with("franchise_partner", "Beta Tekstil"),
            Row::new()
                .with("partner_tier_assessment", "🏆 Excellent Partner")
                .with("franchise_partner", "Alfa Giyim")
                .with("avg_performance_score", 96.5),
        ];
        let out = run(top_partner, Category::PartnerPerformance, &rows).unwrap();
        assert_eq!(out.insights, vec!["🏆 En başarılı partner: Alfa Giyim (Skor: 96.5)"]);
    }

    #[test]
    fn expansion_counts_premium_and_high_priority() {
        let rows = vec![
            Row::new()
                .with("opportunity_classification", "🚀 Premium Opportunity")
                .with("target_city", "Berlin")
                .with("target_country", "Germany")
                .with("roi_projection_pct", 24),
            Row::new().with("opportunity_classification", "⭐ High Priority Opportunity"),
            Row::new().with("opportunity_classification", "📋 Low Priority Opportunity"),
        ];
        let out = run(best_opportunity, Category::ExpansionAnalysis, &rows).unwrap();
        assert_eq!(
            out.insights,
            vec![
                "🚀 En iyi fırsat: Berlin, Germany (ROI: %24)",
                "⭐ 2 yüksek öncelikli genişleme fırsatı",
            ]
        );
    }

    #[test]
    fn support_summary_averages_over_all_rows() {
        let rows = vec![
            Row::new()
                .with("franchise_partner", "A")
                .with("partner_avg_resolution_time", 20.0)
                .with("resolution_rate_pct", 90.0),
            Row::new().with("franchise_partner", "A").with("partner_avg_resolution_time", 30.0),
        ];
        let out = run(support_summary, Category::SupportTickets, &rows).unwrap();
        assert_eq!(out.metrics["total_tickets"], 2.0);
        assert_eq!(out.metrics["unique_partners"], 1.0);
        assert_eq!(out.metrics["avg_resolution_time"], 25.0);
        assert_eq!(out.metrics["resolution_rate"], 45.0);
    }
}
