//! # Product Catalog Tests
//!
//! Test suite for catalog parsing, lookup, and filtering.

#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::errors::StorefrontError;
    use crate::types::catalog::{ProductDescriptor, ProductId};

    const CATALOG_JSON: &str = r#"[
        {
            "id": "fridge-653",
            "title": "Frost-Free Refrigerator 653 L",
            "brand": "Polarix",
            "category": "refrigerators",
            "price": 82990,
            "mrp": 94990,
            "discount": 12,
            "rating": 4.4,
            "reviews": 312,
            "image": "images/fridge-653.webp",
            "inStock": true,
            "capacity": "653 L",
            "energyRating": "3 Star",
            "specs": { "Defrost": "Frost Free", "Doors": "2" }
        },
        {
            "id": "washer-8kg",
            "title": "Front Load Washing Machine 8 kg",
            "brand": "Aquaspin",
            "category": "washing-machines",
            "price": 38990,
            "inStock": false
        },
        {
            "id": "ac-1.5t",
            "title": "Inverter Split AC 1.5 Ton",
            "brand": "Polarix",
            "category": "air-conditioners",
            "price": 46490
        }
    ]"#;

    #[test]
    fn test_parse_catalog_json() {
        let catalog = Catalog::from_json(CATALOG_JSON).expect("valid catalog");
        assert_eq!(catalog.len(), 3);

        let fridge = catalog.get(&ProductId::new("fridge-653")).expect("found");
        assert_eq!(fridge.brand, "Polarix");
        assert_eq!(fridge.mrp, Some(94990));
        assert_eq!(fridge.discount, Some(12));
        assert_eq!(fridge.energy_rating.as_deref(), Some("3 Star"));
        assert_eq!(
            fridge.specs.as_ref().and_then(|s| s.get("Doors")).map(String::as_str),
            Some("2")
        );
    }

    #[test]
    fn test_lookup_absent_id() {
        let catalog = Catalog::from_json(CATALOG_JSON).expect("valid catalog");
        assert!(catalog.get(&ProductId::new("toaster-9000")).is_none());
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = Catalog::from_json(CATALOG_JSON).expect("valid catalog");
        let fridges = catalog.by_category("refrigerators");

        assert_eq!(fridges.len(), 1);
        assert_eq!(fridges[0].id.as_str(), "fridge-653");
    }

    #[test]
    fn test_filter_by_brand_preserves_order() {
        let catalog = Catalog::from_json(CATALOG_JSON).expect("valid catalog");
        let polarix = catalog.by_brand("Polarix");

        let ids: Vec<&str> = polarix.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["fridge-653", "ac-1.5t"]);
    }

    #[test]
    fn test_missing_stock_flag_counts_as_in_stock() {
        let catalog = Catalog::from_json(CATALOG_JSON).expect("valid catalog");
        let available = catalog.in_stock();

        let ids: Vec<&str> = available.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["fridge-653", "ac-1.5t"]);
    }

    #[test]
    fn test_duplicate_ids_first_occurrence_wins() {
        let first = ProductDescriptor::new(ProductId::new("dup"), "First", 100);
        let second = ProductDescriptor::new(ProductId::new("dup"), "Second", 200);

        let catalog = Catalog::new(vec![first, second]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&ProductId::new("dup")).expect("found").title, "First");
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let result = Catalog::from_json("{ not a catalog");
        assert!(matches!(result, Err(StorefrontError::CatalogParse(_))));
    }
}
