//! Example: classifying websocket frames received from the relay.
//!
//! Run with: RUST_LOG=debug cargo run --example decode_frames

use radar_relay_types::{WebsocketEvent, WebsocketRequest, WebsocketTopic, WsFrame};
use tracing_subscriber::EnvFilter;

const FRAMES: &[&str] = &[
    r#"{"type":"SUBSCRIBE","requestId":1}"#,
    r#"{"action":"CANCEL","event":{"baseTokenAddress":"0xe41d2489571d322189246dafa5ebde1f4699f498","quoteTokenAddress":"0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2","transactionHash":"0x8c2b","orderType":"BID","orderHash":"0x1f3e"}}"#,
    r#"{"action":"REMOVE","event":{"baseTokenAddress":"0xe41d2489571d322189246dafa5ebde1f4699f498","quoteTokenAddress":"0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2","reason":"EXPIRED","orderType":"ASK","orderHash":"0x77aa"}}"#,
    r#"{"type":"ERROR","requestId":2,"message":"unknown market"}"#,
    r#"{"heartbeat":true}"#,
    r#"{"action":"NEW","event":{}}"#,
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let request = WebsocketRequest::subscribe(WebsocketTopic::Book, "ZRX-WETH").with_request_id(1);
    println!("-> {}", request.to_frame()?);

    for text in FRAMES {
        match WsFrame::parse(text) {
            Ok(WsFrame::Event(event)) => match &event {
                WebsocketEvent::Remove(remove) => {
                    println!("<- REMOVE {} ({})", remove.order_hash, remove.reason);
                }
                _ => println!("<- {} {}", event.action(), event.order_hash()),
            },
            Ok(WsFrame::Response(response)) => match response.into_result() {
                Ok(acked) => println!("<- {} acknowledged", acked),
                Err(e) => println!("<- {}", e),
            },
            Ok(WsFrame::Unknown(value)) => println!("<- unknown frame: {}", value),
            Err(e) => println!("<- rejected: {}", e),
        }
    }

    Ok(())
}
