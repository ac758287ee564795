use std::fs::File;
use std::io::BufReader;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::StatusCode;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, error, info};
use crate::codec::codec::{announce_response, failure_response, scrape_response};
use crate::common::common::parse_query;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::errors::TrackerError;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

pub const HTTP_CONTENT_TYPE: &str = "text/plain; charset=ISO-8859-1";

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_announce)));
        cfg.service(web::resource("/scrape").route(web::get().to(http_service_scrape)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub fn http_service_tls_config(ssl_key: &str, ssl_cert: &str) -> std::io::Result<rustls::ServerConfig>
{
    let key_file = &mut BufReader::new(File::open(ssl_key)?);
    let certs_file = &mut BufReader::new(File::open(ssl_cert)?);

    let tls_certs = rustls_pemfile::certs(certs_file).collect::<Result<Vec<_>, _>>()?;
    let tls_key = rustls_pemfile::private_key(key_file)?
        .ok_or_else(|| std::io::Error::new(std::io::ErrorKind::InvalidData, format!("no private key found in {ssl_key}")))?;

    rustls::ServerConfig::builder()
        .with_no_client_auth()
        .with_single_cert(tls_certs, tls_key)
        .map_err(std::io::Error::other)
}

pub async fn http_service(
    addr: SocketAddr,
    data: Arc<TorrentTracker>,
    http_server_object: HttpTrackersConfig
) -> std::io::Result<(ServerHandle, Server)>
{
    let keep_alive = http_server_object.keep_alive;
    let request_timeout = http_server_object.request_timeout;
    let disconnect_timeout = http_server_object.disconnect_timeout;
    let workers = http_server_object.threads.max(1) as usize;
    let tls_config = match http_server_object.ssl {
        true => Some(http_service_tls_config(&http_server_object.ssl_key, &http_server_object.ssl_cert)?),
        false => None
    };

    let service_data = Arc::new(HttpServiceData {
        torrent_tracker: data,
        http_trackers_config: Arc::new(http_server_object)
    });
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(service_data.clone()))
    })
        .keep_alive(Duration::from_secs(keep_alive))
        .client_request_timeout(Duration::from_secs(request_timeout))
        .client_disconnect_timeout(Duration::from_secs(disconnect_timeout))
        .workers(workers);

    let server = match tls_config {
        Some(tls_config) => {
            info!("[HTTP] Starting server listener with SSL on {}", addr);
            server.bind_rustls_0_23((addr.ip(), addr.port()), tls_config)?
        }
        None => {
            info!("[HTTP] Starting server listener on {}", addr);
            server.bind((addr.ip(), addr.port()))?
        }
    }
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

fn http_service_response(status: StatusCode, body: Vec<u8>) -> HttpResponse
{
    HttpResponse::build(status).content_type(HTTP_CONTENT_TYPE).body(body)
}

/// Maps a failed request onto its status code, counting and logging it on the way.
pub fn http_service_failure(tracker: &TorrentTracker, error: TrackerError) -> HttpResponse
{
    let status = error.status_code();
    match &error {
        TrackerError::Unauthorized => tracker.update_stats(StatsEvent::Unauthorized, 1),
        _ if error.is_internal() => {
            tracker.update_stats(StatsEvent::InternalErrors, 1);
            sentry::capture_error(&error);
            error!("[HTTP] Request failed: {:?}", error);
        }
        _ => tracker.update_stats(StatsEvent::BadRequests, 1)
    }
    http_service_response(status, failure_response(&error.to_string()))
}

pub fn http_service_remote_ip(request: &HttpRequest, config: &HttpTrackersConfig) -> Result<Ipv4Addr, TrackerError>
{
    let forwarded = request.headers()
        .get(config.real_ip.as_str())
        .map(|value| value.to_str().unwrap_or_default());
    TorrentTracker::resolve_remote_ip(request.peer_addr().map(|addr| addr.ip()), forwarded)
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = data.torrent_tracker.as_ref();
    tracker.update_stats(StatsEvent::Announces, 1);

    let ip = match http_service_remote_ip(&request, &data.http_trackers_config) {
        Ok(ip) => ip,
        Err(error) => return http_service_failure(tracker, error)
    };
    debug!("[HTTP] Request from {}: Announce", ip);

    let query = parse_query(request.query_string());
    let announce = match tracker.validate_announce(ip, &query) {
        Ok(announce) => announce,
        Err(error) => return http_service_failure(tracker, error)
    };

    let result = match tracker.handle_announce(announce).await {
        Ok(result) => result,
        Err(error) => return http_service_failure(tracker, error)
    };

    let tracker_config = &tracker.config.tracker_config;
    match announce_response(
        tracker_config.request_interval,
        tracker_config.request_interval_minimum,
        result.complete,
        result.incomplete,
        &result.peers
    ) {
        Ok(body) => {
            tracker.update_stats(StatsEvent::AnnounceReplies, 1);
            http_service_response(StatusCode::OK, body)
        }
        Err(error) => http_service_failure(tracker, error.into())
    }
}

pub async fn http_service_scrape(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = data.torrent_tracker.as_ref();
    tracker.update_stats(StatsEvent::Scrapes, 1);
    debug!("[HTTP] Request from {:?}: Scrape", request.peer_addr());

    let query = parse_query(request.query_string());
    let scrape = match tracker.validate_scrape(&query) {
        Ok(scrape) => scrape,
        Err(error) => return http_service_failure(tracker, error)
    };

    match tracker.handle_scrape(scrape).await {
        Ok(files) => {
            tracker.update_stats(StatsEvent::ScrapeReplies, 1);
            http_service_response(StatusCode::OK, scrape_response(&files))
        }
        Err(error) => http_service_failure(tracker, error)
    }
}

pub async fn http_service_not_found(data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    data.torrent_tracker.update_stats(StatsEvent::NotFound, 1);
    http_service_response(StatusCode::NOT_FOUND, failure_response("unknown request"))
}
