//! 测试用内存传输层

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use cs_client::{CloudStackClient, CsError, HttpMethod, QueryParams, Result, Transport};

/// 预置响应
#[derive(Clone)]
enum Reply {
    Body(String),
    Error { code: u16, text: String },
}

/// 按命令名返回预置响应的传输层
///
/// 每个命令的响应按顺序取出，最后一条会被重复返回。
#[derive(Default)]
pub struct FakeTransport {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    calls: Mutex<Vec<(HttpMethod, QueryParams)>>,
}

impl FakeTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn reply(&self, command: &str, body: &str) -> &Self {
        self.push(command, Reply::Body(body.to_string()))
    }

    pub fn reply_error(&self, command: &str, code: u16, text: &str) -> &Self {
        self.push(
            command,
            Reply::Error {
                code,
                text: text.to_string(),
            },
        )
    }

    fn push(&self, command: &str, reply: Reply) -> &Self {
        self.replies
            .lock()
            .unwrap()
            .entry(command.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    /// 所有已发送的请求
    pub fn calls(&self) -> Vec<(HttpMethod, QueryParams)> {
        self.calls.lock().unwrap().clone()
    }

    /// 某个命令的请求
    pub fn calls_to(&self, command: &str) -> Vec<(HttpMethod, QueryParams)> {
        self.calls()
            .into_iter()
            .filter(|(_, p)| p.get("command") == Some(command))
            .collect()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, method: HttpMethod, params: QueryParams) -> Result<Vec<u8>> {
        let command = params.get("command").unwrap_or_default().to_string();
        self.calls.lock().unwrap().push((method, params));

        let reply = {
            let mut replies = self.replies.lock().unwrap();
            let queue = replies
                .get_mut(&command)
                .ok_or_else(|| CsError::HttpError(format!("未预置响应: {}", command)))?;
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        };

        match reply {
            Some(Reply::Body(body)) => Ok(body.into_bytes()),
            Some(Reply::Error { code, text }) => Err(CsError::ApiError {
                code,
                cs_code: 4350,
                text,
            }),
            None => Err(CsError::HttpError(format!("未预置响应: {}", command))),
        }
    }
}

/// 使用内存传输层的客户端
pub fn client(transport: &Arc<FakeTransport>) -> CloudStackClient {
    CloudStackClient::with_transport(transport.clone())
}
