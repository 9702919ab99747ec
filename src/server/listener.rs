// Listener module
// Binds the front-end socket with address reuse enabled

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Bind a `TcpListener` with `SO_REUSEADDR` and `SO_REUSEPORT` set.
///
/// Address reuse lets a replacement process bind the same address while a
/// previous instance is still draining, so rolling a new version never
/// loses the port to `TIME_WAIT`. The backlog size comes from
/// `server.backlog` in the configuration.
pub fn bind_listener(addr: std::net::SocketAddr, backlog: i32) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.set_reuse_port(true)?;

    // Tokio requires the socket in non-blocking mode
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(backlog)?;

    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}
