//! Request handlers for the relay routes

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use futures_util::stream::{self, Stream};
use serde::Deserialize;
use warp::http::StatusCode;
use warp::path::Tail;
use warp::reply::Response;
use warp::sse::Event;
use warp::Reply;

use crate::broadcast::Reader;
use crate::registry::{ChannelName, ChannelRegistry};
use crate::server::shutdown::ShutdownSignal;

/// Body of a publish request
///
/// Field names follow the browser sender (`Room`, `Msg`); lower case is
/// accepted as well. Missing fields decode as empty.
#[derive(Debug, Default, Deserialize)]
pub struct PublishRequest {
    #[serde(rename = "Room", alias = "room", default)]
    pub room: String,
    #[serde(rename = "Msg", alias = "msg", default)]
    pub msg: String,
}

fn error_reply(status: StatusCode, message: impl Into<String>) -> Response {
    warp::reply::with_status(message.into(), status).into_response()
}

/// `POST /s/`: publish a message to a room
///
/// The body is decoded as JSON regardless of `Content-Type`, since the
/// browser sender posts in `no-cors` mode. An undecodable body is treated
/// as an empty request.
pub async fn publish(body: Bytes, registry: Arc<ChannelRegistry>) -> Result<Response, Infallible> {
    let request = match serde_json::from_slice::<PublishRequest>(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!(error = %e, "Malformed publish body");
            PublishRequest::default()
        }
    };

    if request.room.is_empty() {
        return Ok(error_reply(
            StatusCode::BAD_REQUEST,
            "Bad Request Error: No Room",
        ));
    }
    if request.msg.is_empty() {
        return Ok(error_reply(
            StatusCode::BAD_REQUEST,
            "Bad Request Error: No Msg",
        ));
    }

    let room = match registry.channel_name(&request.room) {
        Ok(room) => room,
        Err(e) => {
            tracing::warn!(error = %e, "Publish rejected");
            return Ok(error_reply(
                StatusCode::BAD_REQUEST,
                "Bad Request Error: wrong room name",
            ));
        }
    };

    match registry.publish(&room, Bytes::from(request.msg)).await {
        Ok(()) => Ok(StatusCode::OK.into_response()),
        Err(e) => {
            tracing::error!(room = %room, error = %e, "Publish failed");
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal Server Error: {}", e),
            ))
        }
    }
}

/// `GET /n/{room}`: stream a room's messages as server-sent events
pub async fn stream(
    tail: Tail,
    registry: Arc<ChannelRegistry>,
    shutdown: ShutdownSignal,
    keep_alive: Duration,
) -> Result<Response, Infallible> {
    let room = match registry.channel_name(tail.as_str()) {
        Ok(room) => room,
        Err(e) => {
            tracing::warn!(error = %e, "Subscribe rejected");
            return Ok(error_reply(
                StatusCode::BAD_REQUEST,
                "Bad Request Error: wrong room name",
            ));
        }
    };

    let reader = registry.subscribe(&room).await;
    tracing::debug!(room = %room, "Subscriber connected");

    let events = event_stream(reader, shutdown, room);
    let reply = warp::sse::reply(warp::sse::keep_alive().interval(keep_alive).stream(events));
    Ok(reply.into_response())
}

/// Turn a reader into a stream of events
///
/// Each step races the reader against the shutdown signal. The client going
/// away drops the stream, which abandons the pending wait without consuming
/// anything.
fn event_stream(
    reader: Reader<Bytes>,
    shutdown: ShutdownSignal,
    room: ChannelName,
) -> impl Stream<Item = Result<Event, Infallible>> + Send + 'static {
    stream::unfold(
        (reader, shutdown, room),
        |(mut reader, shutdown, room)| async move {
            tokio::select! {
                _ = shutdown.wait() => {
                    tracing::debug!(room = %room, "Ending stream on shutdown");
                    return None;
                }
                _ = reader.wait() => {}
            }

            match reader.read().await {
                Some(payload) => {
                    let event = Event::default().data(String::from_utf8_lossy(&payload));
                    Some((Ok(event), (reader, shutdown, room)))
                }
                None => {
                    tracing::debug!(room = %room, "Channel closed, ending stream");
                    None
                }
            }
        },
    )
}
