use std::{fmt, str::FromStr};

use api_types::Id;

/// Client-visible routes. Each maps onto a screen of the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Jar, stats and ledger list together.
    Home,
    /// Create form, or update form when an id is given.
    LedgerForm(Option<Id>),
    Jar,
    Stats,
    Ledger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (path, query) = match s.trim().split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (s.trim(), None),
        };
        let path = path.trim_end_matches('/');

        match path {
            "" => Ok(Self::Home),
            "/jar" => Ok(Self::Jar),
            "/stats" => Ok(Self::Stats),
            "/ledger" => Ok(Self::Ledger),
            "/ledger-form" => {
                let id = query
                    .into_iter()
                    .flat_map(|query| query.split('&'))
                    .filter_map(|pair| pair.split_once('='))
                    .find(|(key, value)| *key == "id" && !value.is_empty())
                    .and_then(|(_, value)| value.parse::<Id>().ok());
                Ok(Self::LedgerForm(id))
            }
            _ => Err(UnknownRoute(s.to_string())),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => f.write_str("/"),
            Self::LedgerForm(None) => f.write_str("/ledger-form"),
            Self::LedgerForm(Some(id)) => write!(f, "/ledger-form?id={id}"),
            Self::Jar => f.write_str("/jar"),
            Self::Stats => f.write_str("/stats"),
            Self::Ledger => f.write_str("/ledger"),
        }
    }
}
