/// Extract the host portion of a `host:port` connection address.
///
/// Splits at the last `:` so bracketed IPv6 literals (`[2001:db8::1]:443`)
/// survive, and strips exactly one layer of brackets. Returns `None` when no
/// port separator exists. The result is not validated as an IP address;
/// downstream trust checks treat invalid strings as never trusted.
pub fn host_part(addr_port: &str) -> Option<&str> {
    let sep = addr_port.rfind(':')?;
    let host = &addr_port[..sep];
    if host.starts_with('[') && host.ends_with(']') {
        Some(&host[1..host.len() - 1])
    } else {
        Some(host)
    }
}
