#![allow(dead_code)]

use std::fs::File;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// Write a small zip archive holding `samsum/train.csv`.
pub fn write_sample_zip(path: &Path) {
    let file = File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    zip.start_file("samsum/train.csv", options).unwrap();
    zip.write_all(b"id,dialogue,summary\n1,hello,hi\n").unwrap();
    zip.finish().unwrap();
}

/// Serve exactly one HTTP response on a random local port.
///
/// Returns the URL to request, a hit counter, and the server thread handle.
pub fn serve_once(
    status_line: &'static str,
    body: Vec<u8>,
) -> (String, Arc<AtomicUsize>, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let handle = thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            counter.fetch_add(1, Ordering::SeqCst);
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let header = format!(
                "{status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&body);
        }
    });
    (format!("http://{addr}/summarizer-data.zip"), hits, handle)
}
