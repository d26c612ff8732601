use lambda_http::aws_lambda_events::apigw::ApiGatewayProxyRequestContext;
use lambda_http::request::RequestContext;
use lambda_http::{Body, Request, RequestExt};
use serde_json::Value;

/// Builds a proxy-integration request as API Gateway would deliver it.
pub fn build_proxy_request(body: Body) -> Request {
    let request_context = RequestContext::ApiGatewayV1(ApiGatewayProxyRequestContext::default());

    Request::new(body).with_request_context(request_context)
}

pub fn build_json_proxy_request(body: Value) -> Request {
    build_proxy_request(Body::Text(body.to_string()))
}
