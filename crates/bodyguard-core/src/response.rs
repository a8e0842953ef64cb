use crate::verdict::Verdict;
use serde::Serialize;

/// JSON body returned alongside a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResponseBody {
    pub status: &'static str,
    pub code: u16,
    pub message: &'static str,
}

impl ResponseBody {
    pub const SUCCESS: Self = Self {
        status: "success",
        code: 200,
        message: "",
    };

    pub const FORBIDDEN: Self = Self {
        status: "error",
        code: 403,
        message: "is_malicious found",
    };

    pub fn for_verdict(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Accept => Self::SUCCESS,
            Verdict::Reject => Self::FORBIDDEN,
        }
    }
}
