//! Tests for reference data loading and lookups.

#[cfg(test)]
mod tests {
    use std::fs;

    use rust_decimal_macros::dec;

    use crate::errors::Error;
    use crate::reference::*;

    const ONE_DEPOT: &str = r#"{"Lista_de_Depositos":[
        {"Id_Deposito":"A","Nombre":"NORTE","Latitud":-24.0,"Longitud":-65.0}
    ]}"#;

    #[test]
    fn test_bundled_reference_data_loads() {
        let data = ReferenceData::bundled().unwrap();
        assert_eq!(data.depots().len(), 3);
        assert_eq!(data.margin_factor(), dec!(0.4286));
        assert_eq!(data.zones(), vec!["1", "2", "3", "4", "5"]);
        assert!(data.localities("5").is_empty());
        assert!(!data.distance_cache_entries().is_empty());
        assert_eq!(data.cargo_bands().bands().len(), 12);

        let oran = data.find_depot("DEP-003").unwrap();
        assert!(oran.is_new);
        assert_eq!(oran.name, "DEPOSITO ORAN");
    }

    #[test]
    fn test_depot_resolution_prefers_id_over_name() {
        let depots = r#"{"Lista_de_Depositos":[
            {"Id_Deposito":"A","Nombre":"B","Latitud":1.0,"Longitud":1.0},
            {"Id_Deposito":"B","Nombre":"OTHER","Latitud":2.0,"Longitud":2.0}
        ]}"#;
        let data = ReferenceData::from_json(depots, "[]", "{}").unwrap();
        assert_eq!(data.resolve_depot("B").unwrap().id, "B");
        assert_eq!(data.resolve_depot("OTHER").unwrap().id, "B");
        assert!(data.resolve_depot("MISSING").is_none());
    }

    #[test]
    fn test_ambiguous_depot_name_returns_first() {
        let depots = r#"{"Lista_de_Depositos":[
            {"Id_Deposito":"A","Nombre":"SAME","Latitud":1.0,"Longitud":1.0},
            {"Id_Deposito":"B","Nombre":"SAME","Latitud":2.0,"Longitud":2.0}
        ]}"#;
        let data = ReferenceData::from_json(depots, "[]", "{}").unwrap();
        assert_eq!(data.find_depot_by_name("SAME").unwrap().id, "A");
    }

    #[test]
    fn test_margin_falls_back_to_default() {
        let data = ReferenceData::from_json(ONE_DEPOT, "[]", "{}").unwrap();
        assert_eq!(data.margin_factor(), dec!(0.4286));

        let zero = r#"[{"Parametro":"General","Margen_Ganancia":0}]"#;
        let data = ReferenceData::from_json(ONE_DEPOT, zero, "{}").unwrap();
        assert_eq!(data.margin_factor(), dec!(0.4286));

        let custom = r#"[{"Parametro":"General","Margen_Ganancia":0.5}]"#;
        let data = ReferenceData::from_json(ONE_DEPOT, custom, "{}").unwrap();
        assert_eq!(data.margin_factor(), dec!(0.5));
    }

    #[test]
    fn test_invalid_documents_are_rejected() {
        let empty = r#"{"Lista_de_Depositos":[]}"#;
        assert!(matches!(
            ReferenceData::from_json(empty, "[]", "{}"),
            Err(Error::Reference(ReferenceDataError::NoDepots))
        ));

        let duplicated = r#"{"Lista_de_Depositos":[
            {"Id_Deposito":"A","Nombre":"X","Latitud":1.0,"Longitud":1.0},
            {"Id_Deposito":"A","Nombre":"Y","Latitud":2.0,"Longitud":2.0}
        ]}"#;
        assert!(matches!(
            ReferenceData::from_json(duplicated, "[]", "{}"),
            Err(Error::Reference(ReferenceDataError::DuplicateDepotId(id))) if id == "A"
        ));

        match ReferenceData::from_json(ONE_DEPOT, "[]", "not json") {
            Err(Error::Reference(ReferenceDataError::Malformed { document, .. })) => {
                assert_eq!(document, DISTANCE_CACHE_FILE);
            }
            other => panic!("expected malformed cache document, got {other:?}"),
        }
    }

    #[test]
    fn test_from_dir_reads_three_documents() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DEPOTS_FILE), ONE_DEPOT).unwrap();
        fs::write(dir.path().join(PARAMETERS_FILE), "[]").unwrap();
        fs::write(
            dir.path().join(DISTANCE_CACHE_FILE),
            r#"{"-24.0,-65.0,-24.79137674950297,-65.41599201442627": 99}"#,
        )
        .unwrap();

        let data = ReferenceData::from_dir(dir.path()).unwrap();
        assert_eq!(data.depots()[0].id, "A");
        assert_eq!(data.distance_cache_entries().len(), 1);
    }

    #[test]
    fn test_from_dir_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ReferenceData::from_dir(dir.path()),
            Err(Error::Reference(ReferenceDataError::Io(_)))
        ));
    }

    #[test]
    fn test_locality_lookup_is_scoped_to_zone() {
        let data = ReferenceData::bundled().unwrap();
        let salta = data.find_locality("1", "SALTA").unwrap();
        assert_eq!(salta.latitude, -24.79137674950297);
        assert!(data.find_locality("2", "SALTA").is_none());
        assert!(data.find_locality("9", "SALTA").is_none());
    }
}
