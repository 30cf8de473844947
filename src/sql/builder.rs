//! Builds the parameterized catalog queries. Identifiers are fixed; every value is bound.

use crate::model::SupplierTier;
use sqlx::{QueryBuilder, Sqlite};

pub const PRODUCT_COLUMNS: &str = "p.id, p.name, p.category, p.attributes, p.created_at";

/// Hard cap on a single product page.
pub const MAX_PRODUCT_LIMIT: u32 = 1000;

/// Conjunctive product filters. Supplier predicates match when any one supplier with an
/// offer for the product satisfies all of them.
#[derive(Clone, Debug, Default)]
pub struct ProductFilter<'a> {
    pub category: Option<&'a str>,
    pub supplier_tier: Option<SupplierTier>,
    pub supplier_tag: Option<&'a str>,
    pub skip: u32,
    pub limit: u32,
}

impl ProductFilter<'_> {
    fn has_supplier_predicate(&self) -> bool {
        self.supplier_tier.is_some() || self.supplier_tag.is_some()
    }
}

/// SELECT products matching `filter`, ordered by id. The supplier join is an EXISTS
/// subquery so a product with several matching offers appears once.
pub fn select_products(filter: &ProductFilter<'_>) -> QueryBuilder<'static, Sqlite> {
    let mut q = QueryBuilder::new(format!("SELECT {} FROM products p WHERE 1 = 1", PRODUCT_COLUMNS));
    if let Some(category) = filter.category {
        q.push(" AND p.category = ").push_bind(category.to_string());
    }
    if filter.has_supplier_predicate() {
        q.push(
            " AND EXISTS (SELECT 1 FROM offers o JOIN suppliers s ON s.id = o.supplier_id WHERE o.product_id = p.id",
        );
        if let Some(tier) = filter.supplier_tier {
            q.push(" AND s.tier = ").push_bind(tier.as_str());
        }
        if let Some(tag) = filter.supplier_tag {
            q.push(" AND EXISTS (SELECT 1 FROM json_each(s.tags) WHERE json_each.value = ")
                .push_bind(tag.to_string())
                .push(")");
        }
        q.push(")");
    }
    let limit = filter.limit.min(MAX_PRODUCT_LIMIT);
    q.push(" ORDER BY p.id ASC LIMIT ")
        .push_bind(i64::from(limit))
        .push(" OFFSET ")
        .push_bind(i64::from(filter.skip));
    q
}

pub fn select_product_by_id() -> String {
    format!("SELECT {} FROM products p WHERE p.id = ?", PRODUCT_COLUMNS)
}

/// Event counts per product since a cutoff. Binds: cutoff timestamp, limit.
/// Equal counts fall back to product id ascending.
pub const SELECT_TRENDING: &str = "SELECT e.product_id AS product_id, p.name AS product_name, \
     COUNT(e.id) AS view_count, p.category AS category \
     FROM events e JOIN products p ON p.id = e.product_id \
     WHERE e.timestamp >= ? \
     GROUP BY e.product_id, p.name, p.category \
     ORDER BY view_count DESC, e.product_id ASC \
     LIMIT ?";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered_query_only_pages() {
        let q = select_products(&ProductFilter { limit: 100, ..Default::default() });
        assert_eq!(
            q.sql(),
            "SELECT p.id, p.name, p.category, p.attributes, p.created_at FROM products p WHERE 1 = 1 \
             ORDER BY p.id ASC LIMIT ? OFFSET ?"
        );
    }

    #[test]
    fn supplier_predicates_share_one_subquery() {
        let q = select_products(&ProductFilter {
            category: Some("Acoustic"),
            supplier_tier: Some(SupplierTier::Tier1),
            supplier_tag: Some("reliable"),
            skip: 0,
            limit: 10,
        });
        let sql = q.sql();
        assert!(sql.contains("p.category = ?"));
        assert_eq!(sql.matches("EXISTS (SELECT 1 FROM offers").count(), 1);
        assert!(sql.contains("s.tier = ?"));
        assert!(sql.contains("json_each(s.tags)"));
    }
}
