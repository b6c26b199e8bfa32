#[derive(PartialEq, Eq, Clone, Debug)]
pub struct KeepAlive {
    pub listen_port: u16,
    pub file_name: String,
}
