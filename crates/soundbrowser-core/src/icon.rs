use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::{Error, Result};

/// Icon used when no registry name appears in the key.
pub const DEFAULT_ICON: &str = "STICK";

const CROSSBOW: &str = "CROSSBOW";

/// Registry names that make poor icons, mapped to the icon shown instead.
pub const ICON_OVERRIDES: &[(&str, &str)] = &[
    ("BUBBLE_COLUMN", "WATER_BUCKET"),
    ("WATER", "WATER_BUCKET"),
    ("FIRE", "LAVA_BUCKET"),
    ("LAVA", "LAVA_BUCKET"),
    ("END_PORTAL", "END_PORTAL_FRAME"),
    ("END_GATEWAY", "END_PORTAL_FRAME"),
    ("TRIPWIRE", "STRING"),
    ("SWEET_BERRY_BUSH", "SWEET_BERRIES"),
];

/// Name of an icon in the host registry (e.g. `WATER_BUCKET`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IconId(String);

impl IconId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IconId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

fn override_for(name: &str) -> Option<&'static str> {
    ICON_OVERRIDES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
}

/// Substring heuristic from catalog keys to registry icons.
#[derive(Debug, Clone, Default)]
pub struct IconHeuristic {
    registry: Vec<String>,
    known: HashSet<String>,
}

impl IconHeuristic {
    /// `names` is the host registry in its canonical order; the first name
    /// contained in a key wins.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let registry: Vec<String> = names.into_iter().map(Into::into).collect();
        let known = registry.iter().cloned().collect();
        Self { registry, known }
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn is_known(&self, name: &str) -> bool {
        name == DEFAULT_ICON || self.known.contains(name)
    }

    /// Best-guess icon for `key`. Pure; the result may not be registered.
    pub fn estimate(&self, key: &str) -> IconId {
        let mut name = self
            .registry
            .iter()
            .find(|candidate| key.contains(candidate.as_str()))
            .map(String::as_str);

        if key.contains(CROSSBOW) {
            name = Some(CROSSBOW);
        }

        let name = name.map(|n| override_for(n).unwrap_or(n));
        IconId::new(name.unwrap_or(DEFAULT_ICON))
    }

    /// [`estimate`](Self::estimate), failing if the registry lacks the icon.
    pub fn resolve(&self, key: &str) -> Result<IconId> {
        let icon = self.estimate(key);
        if self.is_known(icon.as_str()) {
            Ok(icon)
        } else {
            Err(Error::UnknownIcon {
                key: key.to_string(),
                icon,
            })
        }
    }
}
