#[cfg(test)]
mod reqwest_http_client {

    use std::time::Duration;

    use bytes::Bytes;

    use printer_bridge::http_client::error::Error;
    use printer_bridge::http_client::http_client::HttpClient;
    use printer_bridge::http_client::request::{Request, RequestHeaders, RequestMethod};
    use printer_bridge::http_client::reqwest_http_client::ReqwestHttpClient;

    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn should_send_a_get_request_propagating_the_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/printer"))
            .and(header("X-Api-Key", "secret"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Request-Id", "12345")
                    .set_body_raw(r#"{"state":{}}"#, "application/json"),
            )
            .mount(&mock_server)
            .await;

        let http_client = ReqwestHttpClient::default();

        let http_client_request = Request {
            url: format!("{}{}", mock_server.uri(), "/api/printer"),
            method: RequestMethod::Get,
            headers: RequestHeaders::from([("X-Api-Key".to_string(), "secret".to_string())]),
            body: Bytes::new(),
            timeout: None,
        };

        let http_client_response = http_client.execute(http_client_request).await.unwrap();

        assert_eq!(http_client_response.status, 200);
        assert_eq!(http_client_response.body, Bytes::from(r#"{"state":{}}"#));
        assert_eq!(
            http_client_response.headers.get("x-request-id").unwrap(),
            "12345"
        );
    }

    #[tokio::test]
    async fn should_send_a_post_request_with_its_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/job"))
            .and(header("Content-Type", "application/json"))
            .and(body_string(r#"{"command":"cancel"}"#))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let http_client = ReqwestHttpClient::default();
        let http_client_request = Request {
            url: format!("{}{}", mock_server.uri(), "/api/job"),
            method: RequestMethod::Post,
            headers: RequestHeaders::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
            body: Bytes::from(r#"{"command":"cancel"}"#),
            timeout: None,
        };

        let http_client_response = http_client.execute(http_client_request).await.unwrap();

        assert_eq!(http_client_response.status, 204);
        assert!(http_client_response.body.is_empty());
    }

    #[tokio::test]
    async fn should_detect_a_network_error() {
        let http_client = ReqwestHttpClient::default();
        let http_client_request = Request {
            url: format!("{}{}", "http://unknown:1234", "/api/version"),
            method: RequestMethod::Get,
            headers: RequestHeaders::default(),
            body: Bytes::new(),
            timeout: None,
        };

        let http_client_response = http_client.execute(http_client_request).await;

        assert!(http_client_response.is_err());
        assert!(matches!(
            http_client_response.unwrap_err(),
            Error::Network(_)
        ));
    }

    #[tokio::test]
    async fn should_detect_a_timeout_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(100)))
            .mount(&mock_server)
            .await;

        let http_client = ReqwestHttpClient::default();

        let http_client_request = Request {
            url: format!("{}{}", mock_server.uri(), "/slow"),
            method: RequestMethod::Get,
            headers: RequestHeaders::default(),
            body: Bytes::new(),
            timeout: Some(Duration::from_millis(1)),
        };

        let http_client_response = http_client.execute(http_client_request).await;

        assert!(http_client_response.is_err());
        assert!(matches!(http_client_response.unwrap_err(), Error::Timeout));
    }

    #[tokio::test]
    async fn should_support_many_http_methods() {
        let mock_server = MockServer::start().await;

        for (method_enum, method_str) in [
            (RequestMethod::Get, "GET"),
            (RequestMethod::Post, "POST"),
            (RequestMethod::Put, "PUT"),
            (RequestMethod::Delete, "DELETE"),
        ] {
            Mock::given(method(method_str))
                .and(path("/api/files"))
                .respond_with(ResponseTemplate::new(200))
                .mount(&mock_server)
                .await;

            let http_client = ReqwestHttpClient::default();
            let http_client_request = Request {
                url: format!("{}{}", mock_server.uri(), "/api/files"),
                method: method_enum,
                headers: RequestHeaders::default(),
                body: Bytes::new(),
                timeout: None,
            };

            let http_client_response = http_client.execute(http_client_request).await.unwrap();

            assert_eq!(http_client_response.status, 200);
        }
    }
}
