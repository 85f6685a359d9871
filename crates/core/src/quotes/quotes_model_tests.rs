//! Tests for quote request validation helpers and record mapping.

#[cfg(test)]
mod tests {
    use crate::quotes::quotes_model::*;
    use chrono::{Duration, TimeZone, Utc};

    fn complete_request() -> QuoteRequest {
        QuoteRequest {
            depot: "DEP-001".to_string(),
            zone: "1".to_string(),
            locality: "SALTA".to_string(),
            cargo_type: "DE 21 KG A 100 KG".to_string(),
            quantity: 50.0,
            tax_included: false,
            insured: false,
            declared_value: None,
            contact: None,
        }
    }

    fn computed(request: QuoteRequest) -> QuoteComputed {
        let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        QuoteComputed {
            quote_id: "COT-1714564800000-42".to_string(),
            origin_depot_id: "DEP-001".to_string(),
            origin: "CASA CENTRAL JUJUY".to_string(),
            destination: request.destination_label(),
            distance_km: 113,
            price: 28273,
            delivery_estimate: "2-5".to_string(),
            created_at,
            valid_until: QuoteComputed::validity_window(created_at),
            request,
        }
    }

    #[test]
    fn test_complete_request_has_no_missing_fields() {
        assert!(complete_request().missing_fields().is_empty());
    }

    #[test]
    fn test_missing_fields_are_reported_by_name() {
        let mut request = complete_request();
        request.zone = "  ".to_string();
        request.cargo_type.clear();
        request.quantity = f64::NAN;
        assert_eq!(
            request.missing_fields(),
            vec!["zone", "cargoType", "quantity"]
        );
    }

    #[test]
    fn test_declared_value_required_only_when_insured() {
        let mut request = complete_request();
        request.declared_value = Some(f64::NAN);
        assert!(request.missing_fields().is_empty());

        request.insured = true;
        assert_eq!(request.missing_fields(), vec!["declaredValue"]);
        request.declared_value = None;
        assert_eq!(request.missing_fields(), vec!["declaredValue"]);
        request.declared_value = Some(250_000.0);
        assert!(request.missing_fields().is_empty());
    }

    #[test]
    fn test_request_deserializes_with_absent_quantity_as_nan() {
        let json = r#"{"depot":"DEP-001","zone":"1","locality":"SALTA","cargoType":"METROS CUBICOS"}"#;
        let request: QuoteRequest = serde_json::from_str(json).unwrap();
        assert!(request.quantity.is_nan());
        assert!(!request.tax_included);
        assert_eq!(request.declared_value, None);
        assert_eq!(request.missing_fields(), vec!["quantity"]);
    }

    #[test]
    fn test_destination_label() {
        assert_eq!(complete_request().destination_label(), "SALTA (Zone 1)");
    }

    #[test]
    fn test_quote_valid_for_forty_eight_hours() {
        let quote = computed(complete_request());
        assert_eq!(quote.valid_until - quote.created_at, Duration::hours(48));
        assert!(!quote.is_expired(quote.created_at + Duration::hours(48)));
        assert!(quote.is_expired(quote.created_at + Duration::hours(48) + Duration::seconds(1)));
    }

    #[test]
    fn test_record_from_computed_quote() {
        let mut request = complete_request();
        request.insured = true;
        request.declared_value = Some(100_000.0);
        request.contact = Some(CustomerContact {
            name: Some("Ana".to_string()),
            email: Some("ana@example.com".to_string()),
            ..Default::default()
        });
        let quote = computed(request);
        let record = QuoteRecord::from(&quote);

        assert_eq!(record.quote_reference, "COT-1714564800000-42");
        assert_eq!(record.origin, "CASA CENTRAL JUJUY");
        assert_eq!(record.destination, "SALTA (Zone 1)");
        assert_eq!(record.weight, 50.0);
        assert_eq!(record.details.cargo_type, "DE 21 KG A 100 KG");
        assert!(record.details.insured);
        assert_eq!(record.details.declared_value, 100_000.0);
        assert_eq!(record.shipment_type, "standard");
        assert_eq!(record.estimated_price, 28273);
        assert_eq!(record.estimated_time, "2-5");
        assert_eq!(record.status, QuoteStatus::Pending);
        assert_eq!(record.customer_name.as_deref(), Some("Ana"));
        assert_eq!(record.customer_phone, None);
    }

    #[test]
    fn test_status_string_forms() {
        assert_eq!(QuoteStatus::Pending.as_str(), "pending");
        assert_eq!("sent".parse::<QuoteStatus>().unwrap(), QuoteStatus::Sent);
        assert!("archived".parse::<QuoteStatus>().is_err());
        assert_eq!(
            serde_json::to_string(&QuoteStatus::Sent).unwrap(),
            "\"sent\""
        );
    }

    #[test]
    fn test_stored_quote_serializes_flat() {
        let record = QuoteRecord::from(&computed(complete_request()));
        let stored = StoredQuote {
            id: "abc".to_string(),
            record,
        };
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value["id"], "abc");
        assert_eq!(value["quoteReference"], "COT-1714564800000-42");
        assert_eq!(value["details"]["cargoType"], "DE 21 KG A 100 KG");
    }
}
