/// Fallback for price and inventory when the listing does not show them
pub const UNAVAILABLE: &str = "Unavailable";

/// Longest product URL kept in a record; longer ones are dropped, not truncated
pub const MAX_URL_LEN: usize = 255;

/// One normalized product listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRecord {
    competitor: String,
    name: String,
    url: Option<String>,
    part_number: Option<String>,
    price: String,
    inventory: String,
}

/// Values found by the optional field extractors of one item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFields {
    pub url: Option<String>,
    pub part_number: Option<String>,
    pub price: Option<String>,
    pub inventory: Option<String>,
}

impl ProductRecord {
    /// Builds a record from the item title and whatever optional fields were found.
    ///
    /// Double quotes are stripped from the title and the result is prefixed with
    /// the competitor label. URLs longer than [`MAX_URL_LEN`] characters are
    /// omitted; a missing price, or a missing or blank inventory, becomes
    /// [`UNAVAILABLE`].
    pub fn new(competitor: &str, title: &str, fields: ListingFields) -> Self {
        let url = fields.url.filter(|url| {
            let keep = url.chars().count() <= MAX_URL_LEN;
            if !keep {
                ::log::debug!("Dropping {} char url for {}", url.chars().count(), title);
            }
            keep
        });

        Self {
            competitor: competitor.to_string(),
            name: format!("{} - {}", competitor, title.replace('"', "")),
            url,
            part_number: fields.part_number,
            price: fields.price.unwrap_or_else(|| UNAVAILABLE.to_string()),
            inventory: fields
                .inventory
                .filter(|inventory| !inventory.is_empty())
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
        }
    }

    pub fn competitor(&self) -> &str {
        &self.competitor
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn part_number(&self) -> Option<&str> {
        self.part_number.as_deref()
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn inventory(&self) -> &str {
        &self.inventory
    }
}

/// Ordered records of a run: job submission order, then document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    records: Vec<ProductRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProductRecord> {
        self.records.iter()
    }

    /// Moves all records of `other` to the end of this set
    pub fn append(&mut self, other: ResultSet) {
        self.records.extend(other.records);
    }
}

impl From<Vec<ProductRecord>> for ResultSet {
    fn from(records: Vec<ProductRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<ProductRecord> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ProductRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ResultSet {
    type Item = ProductRecord;
    type IntoIter = std::vec::IntoIter<ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ProductRecord;
    type IntoIter = std::slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_prefixed_and_unquoted() {
        let record = ProductRecord::new("Competitor", r#"Widget 5" Lift"#, ListingFields::default());
        assert_eq!(record.name(), "Competitor - Widget 5 Lift");
        assert_eq!(record.competitor(), "Competitor");
    }

    #[test]
    fn test_missing_price_and_inventory_fall_back() {
        let record = ProductRecord::new("Competitor", "Widget", ListingFields::default());
        assert_eq!(record.price(), UNAVAILABLE);
        assert_eq!(record.inventory(), UNAVAILABLE);
        assert_eq!(record.url(), None);
        assert_eq!(record.part_number(), None);
    }

    #[test]
    fn test_blank_inventory_is_unavailable() {
        let fields = ListingFields {
            inventory: Some(String::new()),
            ..ListingFields::default()
        };
        let record = ProductRecord::new("Competitor", "Widget", fields);
        assert_eq!(record.inventory(), UNAVAILABLE);
    }

    #[test]
    fn test_url_length_boundary() {
        let base = "https://shop.example/";
        let at_limit = format!("{}{}", base, "a".repeat(MAX_URL_LEN - base.len()));
        let over_limit = format!("{}b", at_limit);

        let kept = ProductRecord::new(
            "Competitor",
            "Widget",
            ListingFields {
                url: Some(at_limit.clone()),
                ..ListingFields::default()
            },
        );
        assert_eq!(kept.url(), Some(at_limit.as_str()));

        let dropped = ProductRecord::new(
            "Competitor",
            "Widget",
            ListingFields {
                url: Some(over_limit),
                ..ListingFields::default()
            },
        );
        assert_eq!(dropped.url(), None);
    }

    #[test]
    fn test_result_set_append_keeps_order() {
        let record = |title: &str| ProductRecord::new("C", title, ListingFields::default());
        let mut first: ResultSet = vec![record("a"), record("b")].into();
        first.append(vec![record("c")].into());

        let names: Vec<&str> = first.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["C - a", "C - b", "C - c"]);
        assert_eq!(first.len(), 3);
    }
}
