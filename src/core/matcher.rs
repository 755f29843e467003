use crate::models::{DonorCandidate, MatchRequest, Pagination, ScoredDonor, ScoringRules};
use crate::core::{filters::matches_blood_group, scoring::calculate_match_score};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 20;
pub const DEFAULT_MAX_LIMIT: u32 = 100;

/// One page of ranked donors
#[derive(Debug)]
pub struct SearchResult {
    pub donors: Vec<ScoredDonor>,
    pub pagination: Pagination,
    pub pool_size: usize,
}

/// Donor search orchestrator
///
/// # Pipeline Stages
/// 1. Blood group compatibility filter
/// 2. Composite scoring (location + rarity + experience)
/// 3. Stable ranking, best score first
/// 4. Pagination
///
/// The pool is expected to hold available donors only.
#[derive(Debug, Clone)]
pub struct Matcher {
    rules: ScoringRules,
    default_limit: u32,
    max_limit: u32,
}

impl Matcher {
    pub fn new(rules: ScoringRules) -> Self {
        Self {
            rules,
            default_limit: DEFAULT_LIMIT,
            max_limit: DEFAULT_MAX_LIMIT,
        }
    }

    pub fn with_default_rules() -> Self {
        Self::new(ScoringRules::default())
    }

    /// Override the page size used when none is given and the cap applied to any
    pub fn with_limits(mut self, default_limit: u32, max_limit: u32) -> Self {
        self.max_limit = max_limit.max(1);
        self.default_limit = default_limit.clamp(1, self.max_limit);
        self
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Filter to compatible donors and rank them best-first
    ///
    /// Donors with equal scores keep their pool order.
    pub fn rank(&self, pool: Vec<DonorCandidate>, request: &MatchRequest) -> Vec<ScoredDonor> {
        let pool_size = pool.len();

        let mut ranked: Vec<ScoredDonor> = pool
            .into_iter()
            .filter(|donor| matches_blood_group(donor, request))
            .map(|donor| {
                let match_score = calculate_match_score(&donor, request, &self.rules);
                ScoredDonor { donor, match_score }
            })
            .collect();

        // sort_by is stable, which is the tie-break
        ranked.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        tracing::debug!(
            "Ranked {} compatible donors out of {} for {}",
            ranked.len(),
            pool_size,
            request.blood_group
        );

        ranked
    }

    /// Rank the pool and return the requested page
    ///
    /// # Arguments
    /// * `pool` - Available donors from the store
    /// * `request` - Blood group and location needed
    /// * `page` - 1-indexed page, defaults to 1 (0 is treated as 1)
    /// * `limit` - Page size, defaults to 20 and is capped at the max limit
    ///
    /// A page past the end is empty, never an error.
    pub fn search(
        &self,
        pool: Vec<DonorCandidate>,
        request: &MatchRequest,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> SearchResult {
        let pool_size = pool.len();
        let (page, limit) = self.page_params(page, limit);

        let ranked = self.rank(pool, request);
        let pagination = Pagination::new(page, limit, ranked.len());

        let offset = (page as usize - 1).saturating_mul(limit as usize);
        let donors = ranked
            .into_iter()
            .skip(offset)
            .take(limit as usize)
            .collect();

        SearchResult {
            donors,
            pagination,
            pool_size,
        }
    }

    /// Resolve optional paging input into an effective (page, limit)
    pub fn page_params(&self, page: Option<u32>, limit: Option<u32>) -> (u32, u32) {
        let page = page.unwrap_or(DEFAULT_PAGE).max(1);
        let limit = limit.unwrap_or(self.default_limit).clamp(1, self.max_limit);
        (page, limit)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
