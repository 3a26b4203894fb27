#[cfg(test)]
mod tests {
    use crate::client::{ClientError, TransportError, WcpsClient};
    use crate::config::ClientConfig;
    use mockito::{Matcher, Server};
    use wcps_query::{Coverage, OperationKind, Query, QueryError, VariableAllocator};

    fn test_config(server_url: &str) -> ClientConfig {
        ClientConfig::new(format!("{}/rasdaman/ows", server_url))
    }

    #[tokio::test]
    async fn test_send_returns_response_bytes() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("POST", "/rasdaman/ows")
            .with_status(200)
            .with_header("content-type", "text/csv")
            .with_body("18.2,17.9,16.5")
            .create_async()
            .await;

        let client = WcpsClient::new(&test_config(&server.url())).unwrap();
        let body = client
            .send("for $c1 in (AvgLandTemp)\nreturn 1")
            .await
            .unwrap();

        assert_eq!(body, b"18.2,17.9,16.5");
    }

    #[tokio::test]
    async fn test_send_form_encodes_query() {
        let mut server = Server::new_async().await;

        let query_text =
            "for $c1 in (AvgLandTemp)\nreturn encode($c1[ansi(\"2014-07\")], \"text/csv\")";
        let _mock = server
            .mock("POST", "/rasdaman/ows")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::UrlEncoded("query".into(), query_text.into()))
            .with_status(200)
            .with_body("ok")
            .create_async()
            .await;

        let client = WcpsClient::new(&test_config(&server.url())).unwrap();
        let body = client.send(query_text).await.unwrap();

        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn test_send_non_success_status() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("POST", "/rasdaman/ows")
            .with_status(404)
            .with_body("coverage not found")
            .create_async()
            .await;

        let client = WcpsClient::new(&test_config(&server.url())).unwrap();
        let result = client.send("for $c1 in (NoSuchCoverage)\nreturn 1").await;

        match result {
            Err(TransportError::Status { status, body }) => {
                assert_eq!(status, 404);
                assert_eq!(body, "coverage not found");
            }
            other => panic!("Expected status error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_execute_generates_and_sends() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("POST", "/rasdaman/ows")
            .match_body(Matcher::UrlEncoded(
                "query".into(),
                "for $c1 in (AvgLandTemp)\nreturn max($c1)".into(),
            ))
            .with_status(200)
            .with_body("31.4")
            .create_async()
            .await;

        let vars = VariableAllocator::new();
        let coverage = Coverage::with_allocator("AvgLandTemp", &vars);
        let query = Query::new()
            .with_coverage(&coverage)
            .with_operation(OperationKind::Max);

        let client = WcpsClient::new(&test_config(&server.url())).unwrap();
        let body = client.execute(&query, &coverage).await.unwrap();

        assert_eq!(body, b"31.4");
    }

    #[tokio::test]
    async fn test_execute_propagates_query_errors() {
        let server = Server::new_async().await;

        let client = WcpsClient::new(&test_config(&server.url())).unwrap();
        let query = Query::new().with_operation(OperationKind::Max);
        let result = client.execute(&query, 1).await;

        match result {
            Err(ClientError::Query(err)) => assert_eq!(err, QueryError::MissingCoverage),
            other => panic!("Expected query error, got: {:?}", other),
        }
    }
}
