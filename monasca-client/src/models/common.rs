use serde::{Deserialize, Serialize};

/// Hypermedia link attached to most resources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub rel: String,
    #[serde(default)]
    pub href: String,
}

/// `{links, elements}` wrapper returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub elements: Vec<T>,
}

impl<T> Default for Envelope<T> {
    fn default() -> Self {
        Self {
            links: Vec::new(),
            elements: Vec::new(),
        }
    }
}

impl<T> Envelope<T> {
    /// `href` of the `next` link, if the result is paged.
    pub fn next_link(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|l| l.rel == "next")
            .map(|l| l.href.as_str())
    }

    pub fn into_elements(self) -> Vec<T> {
        self.elements
    }
}
