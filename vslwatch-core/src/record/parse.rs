use crate::record::error::RecordError;
use crate::record::types::{Direction, Record, RecordKind, ReqEnd, SessionId, Xid};

/// Parse one `varnishlog` line.
///
/// Returns `Ok(None)` for blank lines and tags the engine has no use for.
pub fn parse_record(line: &str) -> Result<Option<Record>, RecordError> {
    let Some((session, rest)) = next_token(line) else {
        return Ok(None);
    };
    let session = SessionId(parse_id(session, "session id")?);

    let (tag, rest) = next_token(rest).ok_or(RecordError::MissingField("tag"))?;
    let (direction, payload) = next_token(rest).ok_or(RecordError::MissingField("direction"))?;
    let direction = parse_direction(direction)?;
    let payload = payload.trim();

    let kind = match tag {
        "SessionOpen" => RecordKind::SessionOpen {
            client: first_token(payload).to_string(),
        },
        "SessionClose" => RecordKind::SessionClose,
        "ReqStart" => parse_req_start(payload)?,
        "RxRequest" => RecordKind::RxRequest {
            method: first_token(payload).to_string(),
        },
        "RxURL" => RecordKind::RxUrl {
            url: first_token(payload).to_string(),
        },
        "RxProtocol" => RecordKind::RxProtocol {
            version: first_token(payload).to_string(),
        },
        "RxHeader" => {
            let (name, value) = split_header(payload)?;
            RecordKind::RxHeader { name, value }
        }
        "Hit" => RecordKind::Hit {
            object: Xid(parse_id(first_token(payload), "hit object")?),
        },
        "TxStatus" => RecordKind::TxStatus {
            code: first_token(payload)
                .parse()
                .map_err(|_| RecordError::InvalidStatus(payload.to_string()))?,
        },
        "TxResponse" => RecordKind::TxResponse {
            reason: payload.to_string(),
        },
        "TxProtocol" => RecordKind::TxProtocol {
            version: first_token(payload).to_string(),
        },
        "TxHeader" => {
            let (name, value) = split_header(payload)?;
            RecordKind::TxHeader { name, value }
        }
        "VCL_call" => RecordKind::VclCall {
            callback: first_token(payload).to_string(),
        },
        "VCL_return" => RecordKind::VclReturn {
            value: first_token(payload).to_string(),
        },
        "Debug" => RecordKind::Debug {
            text: unquote(payload).to_string(),
        },
        "ReqEnd" => RecordKind::ReqEnd(parse_req_end(payload)?),
        _ => return Ok(None),
    };

    Ok(Some(Record {
        session,
        direction,
        kind,
    }))
}

/// Split off the first whitespace-delimited token, returning it and the remainder.
fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(i) => Some((&s[..i], &s[i..])),
        None => Some((s, "")),
    }
}

fn first_token(s: &str) -> &str {
    next_token(s).map(|(t, _)| t).unwrap_or("")
}

fn parse_id(token: &str, field: &'static str) -> Result<u64, RecordError> {
    token.parse().map_err(|_| RecordError::InvalidId {
        field,
        value: token.to_string(),
    })
}

fn parse_direction(token: &str) -> Result<Direction, RecordError> {
    match token {
        "c" => Ok(Direction::Client),
        "b" => Ok(Direction::Backend),
        "-" => Ok(Direction::Neither),
        other => Err(RecordError::InvalidDirection(other.to_string())),
    }
}

/// `ReqStart c <address> <port> <xid>`; the xid is always the last token.
fn parse_req_start(payload: &str) -> Result<RecordKind, RecordError> {
    let tokens: Vec<&str> = payload.split_whitespace().collect();
    let (xid, client) = match tokens.as_slice() {
        [] => return Err(RecordError::MissingField("xid")),
        [xid] => (*xid, ""),
        [client, .., xid] => (*xid, *client),
    };

    Ok(RecordKind::ReqStart {
        client: client.to_string(),
        xid: Xid(parse_id(xid, "xid")?),
    })
}

fn parse_req_end(payload: &str) -> Result<ReqEnd, RecordError> {
    let mut tokens = payload.split_whitespace();

    let xid = tokens.next().ok_or(RecordError::MissingField("xid"))?;
    let xid = Xid(parse_id(xid, "xid")?);

    let mut seconds = |field: &'static str| -> Result<f64, RecordError> {
        let token = tokens.next().ok_or(RecordError::MissingField(field))?;
        token.parse().map_err(|_| RecordError::InvalidTiming {
            field,
            value: token.to_string(),
        })
    };

    let start = seconds("start time")?;
    let end = seconds("end time")?;
    let session_elapsed = seconds("session elapsed")?;
    let backend = seconds("backend time")?;
    let delivery = seconds("delivery time").ok();

    Ok(ReqEnd {
        xid,
        start,
        end,
        session_elapsed,
        backend,
        delivery,
    })
}

/// `Name: value with spaces` → (`Name:`, `value with spaces`).
fn split_header(payload: &str) -> Result<(String, String), RecordError> {
    let (name, value) = next_token(payload).ok_or(RecordError::MissingField("header name"))?;
    Ok((name.to_string(), value.trim().to_string()))
}

fn unquote(s: &str) -> &str {
    s.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(s)
}
