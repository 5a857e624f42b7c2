mod inbound;
mod outbound;

pub use inbound::InboundConverter;
pub use outbound::OutboundConverter;
