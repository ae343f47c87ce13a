/// Specialties offered when the app starts.
const DEFAULT_SPECIALTIES: &[&str] = &[
    "Revuelta",
    "Frijol con Queso",
    "Queso sin Loroco",
    "Queso con Loroco",
    "Chicharrón",
    "Ayote",
    "Ajo",
    "Jamón",
    "Birria",
    "Camarón",
    "Pollo",
];

/// The editable list of specialties, in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_items(DEFAULT_SPECIALTIES.iter().copied())
    }
}

impl Catalog {
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_items<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut catalog = Self::empty();
        for name in names {
            catalog.add(name.as_ref());
        }
        catalog
    }

    /// Add a specialty. Blank names and exact duplicates are ignored.
    /// Returns true if the catalog changed.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.items.push(name.to_string());
        tracing::debug!(specialty = name, "Specialty added");
        true
    }

    /// Remove every exact match of `name`. Returns true if anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|s| s != name);
        let removed = self.items.len() != before;
        if removed {
            tracing::debug!(specialty = name, "Specialty removed");
        }
        removed
    }

    pub fn list(&self) -> &[String] {
        &self.items
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|s| s == name)
    }

    pub fn first(&self) -> Option<&str> {
        self.items.first().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
