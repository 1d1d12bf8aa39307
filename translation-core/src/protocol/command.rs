#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    Encode,
    Decode,
    ToUrl,
    FromUrl,
    Status,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "translation.encode" => Command::Encode,
            "translation.decode" => Command::Decode,
            "translation.to_url" => Command::ToUrl,
            "translation.from_url" => Command::FromUrl,
            "translation.status" => Command::Status,
            _ => Command::Unknown,
        }
    }
}
