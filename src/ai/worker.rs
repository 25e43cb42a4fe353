//! Background resolution of Gemini requests.
//!
//! The TUI loop stays synchronous; a single worker thread owns a
//! current-thread tokio runtime and resolves requests one at a time, in
//! order. Responses carry back the tokens they were issued under so the
//! shell can drop anything that outlived its screen (requests are never
//! cancelled in flight).

use std::sync::mpsc;
use std::thread;

use crate::ai::gemini::GeminiClient;
use crate::models::Verse;

#[derive(Debug)]
pub enum AiRequest {
    VerseOfDay {
        mount: u64,
    },
    Explain {
        mount: u64,
        seq: u64,
        arabic: String,
        translation: String,
    },
}

#[derive(Debug)]
pub enum AiResponse {
    Verse {
        mount: u64,
        verse: Option<Verse>,
    },
    Explanation {
        mount: u64,
        seq: u64,
        text: String,
    },
}

/// Cheap handle screens use through the shell to issue requests.
///
/// Sends are fire-and-forget: if the worker is gone the send fails and the
/// screen simply keeps its placeholder, which is the documented behavior
/// for an unreachable service anyway.
#[derive(Clone)]
pub struct AiHandle {
    tx: mpsc::Sender<AiRequest>,
}

impl AiHandle {
    pub fn fetch_verse(&self, mount: u64) {
        let _ = self.tx.send(AiRequest::VerseOfDay { mount });
    }

    pub fn explain(&self, mount: u64, seq: u64, arabic: String, translation: String) {
        let _ = self.tx.send(AiRequest::Explain {
            mount,
            seq,
            arabic,
            translation,
        });
    }
}

/// Handle + request receiver without a worker attached. The shell's tests
/// use this to observe exactly which requests navigation issues.
pub fn channel() -> (AiHandle, mpsc::Receiver<AiRequest>) {
    let (tx, rx) = mpsc::channel();
    (AiHandle { tx }, rx)
}

/// Spawn the worker thread. Returns the request handle and the response
/// stream, which the event handler drains into the main loop.
pub fn spawn(client: GeminiClient) -> (AiHandle, mpsc::Receiver<AiResponse>) {
    let (handle, req_rx) = channel();
    let (resp_tx, resp_rx) = mpsc::channel();

    thread::spawn(move || {
        let rt = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(err) => {
                log::error!("could not start AI runtime: {}", err);
                return;
            }
        };

        while let Ok(request) = req_rx.recv() {
            let response = match request {
                AiRequest::VerseOfDay { mount } => AiResponse::Verse {
                    mount,
                    verse: rt.block_on(client.verse_of_the_day()),
                },
                AiRequest::Explain {
                    mount,
                    seq,
                    arabic,
                    translation,
                } => AiResponse::Explanation {
                    mount,
                    seq,
                    text: rt.block_on(client.explain_hadith(&arabic, &translation)),
                },
            };

            if resp_tx.send(response).is_err() {
                break;
            }
        }
    });

    (handle, resp_rx)
}
