use std::fmt;

/// How a reservation is checked against the remaining stock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StockPolicy {
    /// `quantity <= stock`: the last unit can be reserved.
    #[default]
    AllowExhaust,
    /// `quantity < stock`: at least one unit always stays on the shelf.
    Strict,
}

impl StockPolicy {
    pub fn permits(self, quantity: u32, stock: u32) -> bool {
        match self {
            StockPolicy::AllowExhaust => quantity <= stock,
            StockPolicy::Strict => quantity < stock,
        }
    }
}

impl std::str::FromStr for StockPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow-exhaust" | "allow_exhaust" => Ok(StockPolicy::AllowExhaust),
            "strict" => Ok(StockPolicy::Strict),
            other => Err(format!(
                "unknown stock policy: {other} (expected allow-exhaust or strict)"
            )),
        }
    }
}

impl fmt::Display for StockPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockPolicy::AllowExhaust => f.write_str("allow-exhaust"),
            StockPolicy::Strict => f.write_str("strict"),
        }
    }
}
