//! Data-driven pattern tables: category → ordered regex list, and
//! entity kind → extraction regex. Compiled once into an immutable [`Registry`].

use regex::Regex;

use crate::category::{Category, Engine};
use crate::entities::EntityKind;

#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// A table entry failed to compile.
    #[error("invalid pattern for {owner}: {source}")]
    Invalid {
        owner: String,
        #[source]
        source: regex::Error,
    },

    /// A category was registered under an engine it does not belong to.
    #[error("category {category} does not belong to engine {engine}")]
    ForeignCategory { category: Category, engine: Engine },
}

fn compile(owner: &str, pattern: &str) -> Result<Regex, PatternError> {
    Regex::new(pattern).map_err(|source| PatternError::Invalid {
        owner: owner.to_string(),
        source,
    })
}

// ── Tables ───────────────────────────────────────────────────

type CategoryTable = &'static [(Category, &'static [&'static str])];

const FORMAL_WEAR: CategoryTable = &[
    (
        Category::SuitSales,
        &[
            r"takım\s*elbise|suit|business|wedding|luxury|executive|casual",
            r"satış|sales|revenue|gelir|ciro|kar|profit|margin|marj",
            r"kategori|category|type|tür|segment",
        ],
    ),
    (
        Category::BundleAnalysis,
        &[
            r"bundle|paket|set|combo|kampanya|campaign",
            r"discount|indirim|tasarruf|savings|value",
            r"attach|ekleme|birlikte|together",
        ],
    ),
    (
        Category::SizeAnalysis,
        &[
            r"beden|size|ölçü|measurement|fit|kalıp",
            r"tadilat|alteration|düzeltme|adjustment",
            r"iade|return|memnuniyet|satisfaction",
        ],
    ),
    (
        Category::SeasonalTrends,
        &[
            r"sezon|season|mevsim|trend|eğilim",
            r"talep|demand|popüler|popular",
            r"renk|color|kumaş|fabric|stil|style",
        ],
    ),
    (
        Category::CrossAnalysis,
        &[
            r"karşılaştır|compare|versus|vs|kıyas",
            r"benchmark|fark|difference|arasında|between",
        ],
    ),
    (
        Category::Predictive,
        &[
            r"tahmin|predict|forecast|öngörü|gelecek|future",
            r"trend|eğilim|potansiyel|potential",
        ],
    ),
    (
        Category::Anomaly,
        &[
            r"anomali|anomaly|anormal|unusual|garip|strange",
            r"outlier|sapma|deviation|beklenmedik|unexpected",
        ],
    ),
];

const FRANCHISE_OPS: CategoryTable = &[
    (
        Category::PartnerPerformance,
        &[
            r"partner|franchise|başarı|performance",
            r"evaluation|değerlendirme",
            r"score|puan",
            r"revenue|gelir",
            r"compliance|uygunluk",
            r"satisfaction|memnuniyet",
        ],
    ),
    (
        Category::StoreNetwork,
        &[
            r"network|ağ|mağaza",
            r"coverage|kapsam",
            r"region|bölge",
            r"distribution|dağılım",
            r"market|pazar",
            r"geographic|coğrafi",
        ],
    ),
    (
        Category::ExpansionAnalysis,
        &[
            r"expansion|genişleme|büyüme",
            r"pipeline|hat",
            r"opportunity|fırsat",
            r"investment|yatırım",
            r"feasibility|fizibilite",
            r"roi|kar",
        ],
    ),
    (
        Category::SupportTickets,
        &[
            r"support|destek|ticket",
            r"issue|sorun|problem",
            r"resolution|çözüm",
            r"help|yardım",
            r"technical|teknik",
            r"escalation|yükseltme",
        ],
    ),
];

const STORE_PERFORMANCE: CategoryTable = &[
    (
        Category::DailyPerformance,
        &["bugün", "dün", "today", "yesterday", "günlük", "daily", "performans"],
    ),
    (
        Category::StoreComparison,
        &["karşılaştır", "compare", "mağaza", "store", "vs", "fark"],
    ),
    (
        Category::StaffAnalysis,
        &["personel", "çalışan", "staff", "employee", "vardiya", "shift", "satış danışmanı"],
    ),
    (
        Category::TrafficConversion,
        &["trafik", "ziyaretçi", "conversion", "dönüşüm", "footfall", "müşteri"],
    ),
    (
        Category::KpiTracking,
        &["hedef", "kpi", "target", "başarı", "achievement", "fiscal"],
    ),
    (
        Category::TrendAnalysis,
        &["trend", "değişim", "change", "artış", "azalış", "growth", "decline"],
    ),
    (
        Category::RegionalPerformance,
        &["bölge", "ülke", "region", "country", "city", "şehir"],
    ),
    (
        Category::FranchiseAnalysis,
        &["franchise", "owned", "bayi", "sahiplik"],
    ),
    (
        Category::HourlyPatterns,
        &["saat", "hour", "peak", "yoğun", "pattern", "desen"],
    ),
    (
        Category::WeekendAnalysis,
        &["hafta sonu", "weekend", "cumartesi", "pazar", "saturday", "sunday"],
    ),
];

const INVENTORY: CategoryTable = &[
    (
        Category::StockReplenishment,
        &[
            r"replenishment|ikmal|takviye|yenileme",
            r"sipariş|order|tedarik|reorder",
            r"bitecek|tükenecek|biter|run out|running out",
        ],
    ),
    (
        Category::StockoutPrediction,
        &[
            r"stoksuz|stockout|stok\s*tükenme|out of stock",
            r"en kötü|worst case|senaryo|scenario|risk",
            r"kaç gün|how many days|kalan gün|days left|days remaining",
        ],
    ),
    (
        Category::DemandForecast,
        &[
            r"talep|demand",
            r"tahmin|forecast|predict|öngörü",
            r"hava|weather|sıcaklık|temperature|soğuk|cold",
        ],
    ),
    (
        Category::InventoryOptimization,
        &[
            r"optimi[zs]|optimal|optimum",
            r"fazla stok|excess|overstock|ölü stok|dead stock|atıl",
            r"devir|turnover|holding|maliyet|cost",
        ],
    ),
    (
        Category::StockAlerts,
        &[
            r"uyarı|alert|alarm",
            r"kritik|critical|acil|urgent",
            r"stok durumu|stock status|dashboard|özet|summary",
        ],
    ),
    (
        Category::Allocation,
        &[
            r"dağıtım|allocation|allocate|tahsis|paylaştır",
            r"merkez depo|central warehouse|warehouse|depo",
            r"\berp\b|\bai\b|yapay zeka|verimlilik|efficiency",
        ],
    ),
    (
        Category::StockTransfer,
        &[
            r"transfer|aktar|sevk",
            r"mağazalar arası|between stores|inter-store|fazla stoktan",
        ],
    ),
];

const ENTITY_PATTERNS: &[(EntityKind, &str)] = &[
    (EntityKind::Country, r"(türkiye|turkey|almanya|germany|rusya|russia|kazakistan|kazakhstan)"),
    (EntityKind::Store, r"(sv\d{3}|mağaza\s*\d+|store\s*\d+)"),
    (EntityKind::SuitType, r"(business|wedding|luxury|casual|executive)"),
    (
        EntityKind::BundleType,
        r"(complete professional|premium wedding|business essential|weekend smart|luxury executive)",
    ),
    (EntityKind::Size, r"(4[6-9]|5[0-8]|60)\b"),
    (EntityKind::Season, r"(kış|winter|yaz|summer|bahar|spring|sonbahar|fall|autumn)"),
    (
        EntityKind::TimePeriod,
        r"(bugün|today|dün|yesterday|bu hafta|this week|geçen hafta|last week|bu ay|this month)",
    ),
    (EntityKind::Percentage, r"(\d+(?:\.\d+)?%|yüzde\s*\d+)"),
    (EntityKind::Amount, r"(\d+(?:\.\d+)?(?:\s*(?:tl|usd|euro))?)"),
];

// ── PatternSet ───────────────────────────────────────────────

/// Ordered category → compiled patterns. Iteration order is registration order.
#[derive(Debug, Clone)]
pub struct PatternSet {
    engine: Engine,
    default: Category,
    entries: Vec<(Category, Vec<Regex>)>,
}

impl PatternSet {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            default: engine.default_category(),
            entries: Vec::new(),
        }
    }

    /// Register a category and its patterns after those already present.
    pub fn register(&mut self, category: Category, patterns: &[&str]) -> Result<(), PatternError> {
        if category.engine() != self.engine {
            return Err(PatternError::ForeignCategory {
                category,
                engine: self.engine,
            });
        }
        let compiled = patterns
            .iter()
            .map(|p| compile(category.as_str(), p))
            .collect::<Result<Vec<_>, _>>()?;
        self.entries.push((category, compiled));
        Ok(())
    }

    pub fn engine(&self) -> Engine {
        self.engine
    }

    pub fn default_category(&self) -> Category {
        self.default
    }

    pub fn contains(&self, category: Category) -> bool {
        self.entries.iter().any(|(c, _)| *c == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Regex])> {
        self.entries.iter().map(|(c, p)| (*c, p.as_slice()))
    }

    fn from_table(engine: Engine, table: CategoryTable) -> Result<Self, PatternError> {
        let mut set = Self::new(engine);
        for (category, patterns) in table {
            set.register(*category, patterns)?;
        }
        Ok(set)
    }
}

// ── EntityPatternSet ─────────────────────────────────────────

/// Entity kind → single extraction pattern.
#[derive(Debug, Clone)]
pub struct EntityPatternSet {
    entries: Vec<(EntityKind, Regex)>,
}

impl EntityPatternSet {
    pub fn builtin() -> Result<Self, PatternError> {
        let entries = ENTITY_PATTERNS
            .iter()
            .map(|(kind, p)| Ok((*kind, compile(kind.as_str(), p)?)))
            .collect::<Result<Vec<_>, PatternError>>()?;
        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityKind, &Regex)> {
        self.entries.iter().map(|(k, r)| (*k, r))
    }
}

// ── Registry ─────────────────────────────────────────────────

/// Everything an engine needs to read a question. Built once, shared read-only.
#[derive(Debug, Clone)]
pub struct Registry {
    patterns: PatternSet,
    entities: EntityPatternSet,
}

impl Registry {
    pub fn new(patterns: PatternSet, entities: EntityPatternSet) -> Self {
        Self { patterns, entities }
    }

    /// The built-in tables for `engine`.
    pub fn builtin(engine: Engine) -> Result<Self, PatternError> {
        let table = match engine {
            Engine::FormalWear => FORMAL_WEAR,
            Engine::FranchiseOps => FRANCHISE_OPS,
            Engine::StorePerformance => STORE_PERFORMANCE,
            Engine::Inventory => INVENTORY,
        };
        Ok(Self {
            patterns: PatternSet::from_table(engine, table)?,
            entities: EntityPatternSet::builtin()?,
        })
    }

    pub fn engine(&self) -> Engine {
        self.patterns.engine()
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn entities(&self) -> &EntityPatternSet {
        &self.entities
    }
}
