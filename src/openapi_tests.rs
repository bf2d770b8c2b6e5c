#[cfg(test)]
mod tests {
    use crate::schemas::ApiDoc;
    use utoipa::openapi::PathItemType;
    use utoipa::OpenApi;

    #[test]
    fn test_openapi_schema_generation() {
        let openapi = ApiDoc::openapi();

        assert!(openapi.components.is_some());
        let components = openapi.components.as_ref().unwrap();

        for schema in [
            "ErrorResponse",
            "MessageResponse",
            "HealthResponse",
            "AccountResponse",
            "RegisterRequest",
            "CategoryResponse",
            "WasteItemResponse",
            "CommonHistoryResponse",
            "BulkHistoryResponse",
            "CreateWasteRecordRequest",
        ] {
            assert!(components.schemas.contains_key(schema), "missing schema {schema}");
        }

        assert!(serde_json::to_string(&openapi).is_ok());
    }

    #[test]
    fn test_openapi_paths() {
        let openapi = ApiDoc::openapi();
        let paths = &openapi.paths.paths;

        for (path, method) in [
            ("/health", PathItemType::Get),
            ("/users", PathItemType::Get),
            ("/register", PathItemType::Post),
            ("/categories", PathItemType::Get),
            ("/wasteItems/{categoryID}", PathItemType::Get),
            ("/commonWasteHistory/{username}", PathItemType::Get),
            ("/bulkWasteHistory/{username}", PathItemType::Get),
            ("/wasteRecords", PathItemType::Post),
        ] {
            let item = paths.get(path).unwrap_or_else(|| panic!("missing path {path}"));
            assert!(item.operations.contains_key(&method), "missing operation on {path}");
        }
    }

    #[test]
    fn test_register_documents_every_outcome() {
        let openapi = ApiDoc::openapi();
        let register = openapi.paths.paths.get("/register").unwrap();
        let post = register.operations.get(&PathItemType::Post).unwrap();

        for status in ["201", "409", "400", "500"] {
            assert!(post.responses.responses.contains_key(status), "missing {status}");
        }
    }

    #[test]
    fn test_waste_record_request_uses_wire_names() {
        let openapi_json = serde_json::to_string(&ApiDoc::openapi()).unwrap();

        assert!(openapi_json.contains("wasteItemID"));
        assert!(openapi_json.contains("unitOfMeasurement"));
        assert!(openapi_json.contains("categoryID"));
        assert!(!openapi_json.contains("crate::schemas::ErrorResponse"));
    }
}
