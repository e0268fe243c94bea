use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::client::controller::CalculatorController;
use crate::client::models::keys::parse_keys;
use crate::client::services::calculator_service::CalculatorBackend;

pub const HELP: &str = "Keys: 0-9 . + - * / = AC CE (separate with spaces), 'help', 'quit'";

/// Interactive loop: every line is a sequence of button presses, and the
/// display is printed after the line has been applied.
pub async fn run<B, R, W>(
    controller: &mut CalculatorController<B>,
    input: R,
    mut output: W,
) -> anyhow::Result<()>
where
    B: CalculatorBackend,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    output.write_all(format!("{}\n", HELP).as_bytes()).await?;
    write_display(&mut output, controller.display()).await?;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }
        if line.eq_ignore_ascii_case("help") {
            output.write_all(format!("{}\n", HELP).as_bytes()).await?;
            continue;
        }

        match parse_keys(line) {
            Ok(keys) => {
                for key in keys {
                    controller.press(key).await;
                }
                write_display(&mut output, controller.display()).await?;
            }
            Err(e) => {
                output.write_all(format!("[CLIENT] {}\n", e).as_bytes()).await?;
            }
        }
    }
    output.flush().await?;
    Ok(())
}

async fn write_display<W: AsyncWrite + Unpin>(output: &mut W, display: &str) -> std::io::Result<()> {
    output.write_all(format!("[ {} ]\n", display).as_bytes()).await?;
    output.flush().await
}
