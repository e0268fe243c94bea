use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot, Mutex};

use crate::client::services::calculator_service::{CalculatorBackend, ServiceError};
use crate::common::models::Operator;
use crate::common::protocol::{self, ServiceRequest, ServiceResponse};

type Reply = oneshot::Sender<Result<ServiceResponse, ServiceError>>;
type Outgoing = mpsc::UnboundedSender<(ServiceRequest, Reply)>;

/// Reconnect attempts made for one request after the connection drops.
const MAX_RECONNECTS: usize = 1;

/// TCP client for the calculator service.
///
/// The connection is opened lazily. A background task owns the socket and
/// processes requests one at a time, so replies always match their request.
pub struct RemoteCalculator {
    addr: String,
    tx: Mutex<Option<Outgoing>>,
}

impl RemoteCalculator {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            tx: Mutex::new(None),
        }
    }

    /// Creates the client and opens the connection right away.
    pub async fn connect(addr: impl Into<String>) -> Result<Self, ServiceError> {
        let client = Self::new(addr);
        client.ensure_connected().await?;
        Ok(client)
    }

    /// Ensure there is a live background task connected to the service.
    async fn ensure_connected(&self) -> Result<Outgoing, ServiceError> {
        let mut guard = self.tx.lock().await;
        if let Some(tx) = guard.as_ref() {
            if !tx.is_closed() {
                return Ok(tx.clone());
            }
        }

        let connection = Connection::open(&self.addr).await?;
        info!("Connected to calculator service at {}", self.addr);

        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(connection.run(rx));
        *guard = Some(tx.clone());
        Ok(tx)
    }

    async fn request(&self, request: ServiceRequest) -> Result<ServiceResponse, ServiceError> {
        let tx = self.ensure_connected().await?;
        let (resp_tx, resp_rx) = oneshot::channel();
        tx.send((request, resp_tx)).map_err(|_| ServiceError::Closed)?;
        resp_rx.await.map_err(|_| ServiceError::Closed)?
    }
}

#[async_trait]
impl CalculatorBackend for RemoteCalculator {
    async fn calculate(&self, a: f64, b: f64, operator: Operator) -> Result<Vec<f64>, ServiceError> {
        debug!("calculate({}, {}, {})", a, b, operator);
        match self
            .request(ServiceRequest::Calculate { a, b, operator })
            .await?
        {
            ServiceResponse::Ok { result } => Ok(result),
            ServiceResponse::Error { message } => Err(ServiceError::Remote(message)),
        }
    }

    async fn clear_memory(&self) -> Result<(), ServiceError> {
        match self.request(ServiceRequest::ClearMemory).await? {
            ServiceResponse::Ok { .. } => Ok(()),
            ServiceResponse::Error { message } => Err(ServiceError::Remote(message)),
        }
    }
}

struct Connection {
    addr: String,
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
    line: String,
}

impl Connection {
    async fn open(addr: &str) -> Result<Self, ServiceError> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|source| ServiceError::Connect {
                addr: addr.to_string(),
                source,
            })?;
        let (reader, writer) = stream.into_split();
        Ok(Self {
            addr: addr.to_string(),
            reader: BufReader::new(reader),
            writer: BufWriter::new(writer),
            line: String::new(),
        })
    }

    /// Processes outgoing requests sequentially until every sender is dropped.
    async fn run(mut self, mut rx: mpsc::UnboundedReceiver<(ServiceRequest, Reply)>) {
        while let Some((request, reply)) = rx.recv().await {
            let outcome = self.exchange_with_reconnect(&request).await;
            if reply.send(outcome).is_err() {
                debug!("Caller stopped waiting for {:?}", request);
            }
        }
        debug!("Calculator connection task for {} stopped", self.addr);
    }

    async fn exchange_with_reconnect(
        &mut self,
        request: &ServiceRequest,
    ) -> Result<ServiceResponse, ServiceError> {
        let mut attempts = 0;
        loop {
            match self.exchange(request).await {
                Err(e @ (ServiceError::Io(_) | ServiceError::Closed)) if attempts < MAX_RECONNECTS => {
                    attempts += 1;
                    warn!("Connection to {} lost ({}), reconnecting...", self.addr, e);
                    let fresh = Connection::open(&self.addr).await?;
                    self.reader = fresh.reader;
                    self.writer = fresh.writer;
                }
                outcome => return outcome,
            }
        }
    }

    async fn exchange(&mut self, request: &ServiceRequest) -> Result<ServiceResponse, ServiceError> {
        let line = protocol::encode_line(request).map_err(ServiceError::Encode)?;
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.flush().await?;

        self.line.clear();
        if self.reader.read_line(&mut self.line).await? == 0 {
            return Err(ServiceError::Closed);
        }
        protocol::decode_line(&self.line).map_err(ServiceError::Decode)
    }
}
