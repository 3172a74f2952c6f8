//! 调研事件的输出端
//!
//! 输出端只负责序列化并写出 [`StreamMessage`]，不解释事件内容。

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use axum::body::Bytes;
use std::io::Write;
use std::sync::Mutex;
use tokio::sync::mpsc;

use crate::types::StreamMessage;

/// 调研事件的接收方
#[async_trait]
pub trait ResearchOutlet: Send + Sync {
    async fn emit(&self, message: StreamMessage) -> Result<()>;

    /// 对端已断开时返回 true，编排器据此提前结束
    fn is_closed(&self) -> bool {
        false
    }
}

/// 写入HTTP响应体的NDJSON通道
pub struct NdjsonChannelOutlet {
    sender: mpsc::Sender<Bytes>,
}

impl NdjsonChannelOutlet {
    pub fn new(sender: mpsc::Sender<Bytes>) -> Self {
        Self { sender }
    }

    /// 创建通道，返回输出端与响应体读取端
    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<Bytes>) {
        let (sender, receiver) = mpsc::channel(buffer.max(1));
        (Self::new(sender), receiver)
    }
}

#[async_trait]
impl ResearchOutlet for NdjsonChannelOutlet {
    async fn emit(&self, message: StreamMessage) -> Result<()> {
        let line = message.to_line()?;
        self.sender
            .send(Bytes::from(line))
            .await
            .map_err(|_| anyhow!("client disconnected"))
    }

    fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

/// 单次命令行运行：每个事件一行写到标准输出
#[derive(Default)]
pub struct StdoutOutlet;

#[async_trait]
impl ResearchOutlet for StdoutOutlet {
    async fn emit(&self, message: StreamMessage) -> Result<()> {
        let line = message.to_line()?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

/// 在内存中收集全部事件
#[derive(Default)]
pub struct MemoryOutlet {
    messages: Mutex<Vec<StreamMessage>>,
}

impl MemoryOutlet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<StreamMessage> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ResearchOutlet for MemoryOutlet {
    async fn emit(&self, message: StreamMessage) -> Result<()> {
        self.messages
            .lock()
            .map_err(|_| anyhow!("outlet lock poisoned"))?
            .push(message);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_outlet_writes_ndjson_lines() {
        let (outlet, mut receiver) = NdjsonChannelOutlet::channel(4);
        outlet.emit(StreamMessage::progress(5)).await.unwrap();

        let chunk = receiver.recv().await.unwrap();
        assert_eq!(
            std::str::from_utf8(&chunk).unwrap(),
            "{\"type\":\"progress\",\"data\":{\"progress\":5}}\n"
        );
    }

    #[tokio::test]
    async fn test_channel_outlet_reports_disconnect() {
        let (outlet, receiver) = NdjsonChannelOutlet::channel(4);
        assert!(!outlet.is_closed());

        drop(receiver);
        assert!(outlet.is_closed());
        assert!(outlet.emit(StreamMessage::progress(10)).await.is_err());
    }

    #[tokio::test]
    async fn test_memory_outlet_keeps_order() {
        let outlet = MemoryOutlet::new();
        outlet.emit(StreamMessage::progress(5)).await.unwrap();
        outlet.emit(StreamMessage::error("boom")).await.unwrap();

        let kinds: Vec<&str> = outlet.messages().iter().map(|m| m.kind()).collect();
        assert_eq!(kinds, vec!["progress", "error"]);
    }
}
