//! Bridges the UI to the API client: commands in, messages out.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::app::{Command, Message};

/// Drain the command channel, running each request as its own task so a slow
/// call never blocks the next one. Replies carry the command's ticket; the
/// app decides whether they are still current when they land.
pub async fn run(
    client: ApiClient,
    mut cmd_rx: mpsc::UnboundedReceiver<Command>,
    msg_tx: mpsc::UnboundedSender<Message>,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        let client = client.clone();
        let tx = msg_tx.clone();
        tokio::spawn(async move {
            let msg = match cmd {
                Command::Search { ticket, query } => Message::SearchDone {
                    ticket,
                    result: client.search_movies(&query).await,
                },
                Command::FetchDetails {
                    ticket,
                    movie_id,
                    delay_ms,
                } => {
                    if delay_ms > 0 {
                        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    }
                    Message::DetailsDone {
                        ticket,
                        movie_id,
                        result: client.movie_details(movie_id).await,
                    }
                }
                Command::RecommendByMovie {
                    ticket,
                    movie_title,
                } => Message::MovieRecsDone {
                    ticket,
                    result: client.recommend_by_movie(&movie_title).await,
                },
                Command::RecommendByUser { ticket, user_id } => Message::UserRecsDone {
                    ticket,
                    result: client.recommend_by_user(&user_id).await,
                },
            };
            // The UI may already be gone during shutdown
            let _ = tx.send(msg);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reply_carries_request_ticket() {
        // Nothing listens on the discard port, so the call fails fast; the
        // reply must still come back stamped with the right ticket.
        let client = ApiClient::new("http://127.0.0.1:9");
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (msg_tx, mut msg_rx) = mpsc::unbounded_channel();
        tokio::spawn(run(client, cmd_rx, msg_tx));

        cmd_tx
            .send(Command::Search {
                ticket: 7,
                query: "alien".to_string(),
            })
            .unwrap();

        let msg = tokio::time::timeout(Duration::from_secs(5), msg_rx.recv())
            .await
            .expect("dispatcher reply timed out")
            .expect("dispatcher dropped the channel");
        match msg {
            Message::SearchDone { ticket, result } => {
                assert_eq!(ticket, 7);
                assert!(result.is_err());
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
