//! Hostname splitting into subdomain and registered domain.

/// A hostname split into its leading labels and its last two labels.
///
/// The split is purely positional: multi-part public suffixes such as
/// `co.uk` are not recognized, so `www.example.co.uk` yields subdomain
/// `www.example` and domain `co.uk`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostnameParts {
    /// Leading labels joined by `.`, empty when the hostname has two labels or fewer
    pub subdomain: String,
    /// Last two labels joined by `.`, or the whole hostname
    pub domain: String,
}

impl HostnameParts {
    /// Rejoin the parts into the original hostname.
    #[must_use]
    pub fn join(&self) -> String {
        if self.subdomain.is_empty() {
            self.domain.clone()
        } else {
            format!("{}.{}", self.subdomain, self.domain)
        }
    }
}

/// Split a hostname on `.` into subdomain and registered domain.
#[must_use]
pub fn split_hostname(hostname: &str) -> HostnameParts {
    let labels: Vec<&str> = hostname.split('.').collect();

    if labels.len() > 2 {
        let cut = labels.len() - 2;
        HostnameParts {
            subdomain: labels[..cut].join("."),
            domain: labels[cut..].join("."),
        }
    } else {
        HostnameParts {
            subdomain: String::new(),
            domain: hostname.to_string(),
        }
    }
}
