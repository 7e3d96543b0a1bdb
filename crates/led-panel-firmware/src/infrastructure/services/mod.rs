mod notifier;
mod tcp_connector;

pub(crate) use notifier::ConsoleNotifier;
pub(crate) use tcp_connector::TcpConnector;
