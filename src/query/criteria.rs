//! 필터/정렬 조건
// region:    --- Imports
use crate::catalog::{Category, Condition, Listing};

// endregion: --- Imports

/// "전체" 를 뜻하는 센티널 값
pub const ALL_SENTINEL: &str = "ALL";
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";
pub const ALL_CONDITIONS_LABEL: &str = "All";

fn is_all_categories(text: &str) -> bool {
    let text = text.trim();
    text.eq_ignore_ascii_case(ALL_SENTINEL) || text.eq_ignore_ascii_case(ALL_CATEGORIES_LABEL)
}

fn is_all_conditions(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case(ALL_SENTINEL)
}

// region:    --- Category Filter
/// 카테고리 필터
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
    /// 알 수 없는 카테고리: 어떤 리스팅과도 일치하지 않는다.
    Unknown(String),
}

impl CategoryFilter {
    pub fn parse(text: &str) -> Self {
        if is_all_categories(text) {
            return CategoryFilter::All;
        }
        match Category::from_label(text) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::Unknown(text.to_string()),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
            CategoryFilter::Unknown(_) => false,
        }
    }
}
// endregion: --- Category Filter

// region:    --- Condition Filter
/// 상품 상태 필터
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionFilter {
    All,
    /// 빈 목록은 어떤 리스팅과도 일치하지 않는다.
    AnyOf(Vec<Condition>),
}

impl ConditionFilter {
    /// 선택된 상태 목록으로 생성
    /// "ALL" 이 하나라도 있으면 전체, 알 수 없는 값은 버린다.
    pub fn from_selected<I, S>(selected: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut conditions = Vec::new();
        for text in selected {
            let text = text.as_ref();
            if is_all_conditions(text) {
                return ConditionFilter::All;
            }
            if let Some(condition) = Condition::from_label(text) {
                if !conditions.contains(&condition) {
                    conditions.push(condition);
                }
            }
        }
        ConditionFilter::AnyOf(conditions)
    }

    pub fn matches(&self, condition: Condition) -> bool {
        match self {
            ConditionFilter::All => true,
            ConditionFilter::AnyOf(conditions) => conditions.contains(&condition),
        }
    }
}
// endregion: --- Condition Filter

// region:    --- Price Range
/// 가격 범위 (양 끝 포함)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn unbounded() -> Self {
        Self::new(0.0, f64::INFINITY)
    }

    /// 마켓플레이스 필터 패널 초기값
    pub fn panel_default() -> Self {
        Self::new(0.0, 200.0)
    }

    /// min > max 이거나 NaN 이면 항상 false
    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::unbounded()
    }
}
// endregion: --- Price Range

// region:    --- Sort Key
/// 정렬 기준
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// 입력 순서 유지
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    Rating,
}

impl SortKey {
    /// 알 수 없는 값은 `Newest`
    pub fn parse(text: &str) -> Self {
        match text.trim().to_ascii_lowercase().as_str() {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "rating" => SortKey::Rating,
            _ => SortKey::Newest,
        }
    }
}
// endregion: --- Sort Key

// region:    --- Criteria
/// 사용자가 선택한 필터/정렬 조건 전체
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    pub query: String,
    pub category: CategoryFilter,
    pub price: PriceRange,
    pub conditions: ConditionFilter,
    pub sort: SortKey,
}

impl Default for Criteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: CategoryFilter::All,
            price: PriceRange::unbounded(),
            conditions: ConditionFilter::All,
            sort: SortKey::Newest,
        }
    }
}

impl Criteria {
    /// 리스팅이 모든 조건을 만족하는지 여부 (정렬 제외)
    pub fn matches(&self, listing: &Listing) -> bool {
        self.category.matches(listing.category)
            && matches_query(listing, &self.query)
            && self.price.contains(listing.price)
            && self.conditions.matches(listing.condition)
    }
}

fn matches_query(listing: &Listing, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    listing.title.to_lowercase().contains(&needle)
        || listing
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&needle))
}
// endregion: --- Criteria

// region:    --- Request Params
/// `/listings` 쿼리 파라미터 원문
/// 파싱 실패로 요청이 거부되는 일은 없다.
#[derive(Debug, Default)]
pub struct ListingParams {
    pub q: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    /// `condition` 값 전체 (반복 키 허용, 각 값은 쉼표로 구분 가능)
    pub conditions: Option<Vec<String>>,
    pub sort: Option<String>,
}

impl ListingParams {
    /// 쿼리 문자열 키/값 쌍으로 생성
    /// 같은 키가 반복되면 `condition` 은 모두 모으고 나머지는 마지막 값을 쓴다.
    /// 알 수 없는 키는 무시한다.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = ListingParams::default();
        for (key, value) in pairs {
            match key.as_str() {
                "q" => params.q = Some(value),
                "category" => params.category = Some(value),
                "min_price" => params.min_price = Some(value),
                "max_price" => params.max_price = Some(value),
                "condition" => params
                    .conditions
                    .get_or_insert_with(Vec::new)
                    .extend(value.split(',').map(str::to_string)),
                "sort" => params.sort = Some(value),
                _ => {}
            }
        }
        params
    }
}

fn parse_price(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|text| text.trim().parse::<f64>().ok())
        .filter(|value| !value.is_nan())
}

impl From<ListingParams> for Criteria {
    fn from(params: ListingParams) -> Self {
        let defaults = PriceRange::unbounded();
        let price = PriceRange::new(
            parse_price(params.min_price.as_deref()).unwrap_or(defaults.min),
            parse_price(params.max_price.as_deref()).unwrap_or(defaults.max),
        );

        Criteria {
            query: params.q.unwrap_or_default(),
            category: params
                .category
                .as_deref()
                .map(CategoryFilter::parse)
                .unwrap_or(CategoryFilter::All),
            price,
            conditions: params
                .conditions
                .map(ConditionFilter::from_selected)
                .unwrap_or(ConditionFilter::All),
            sort: params
                .sort
                .as_deref()
                .map(SortKey::parse)
                .unwrap_or_default(),
        }
    }
}
// endregion: --- Request Params
