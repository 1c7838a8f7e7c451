#![allow(dead_code)]

use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::thread;

/// Minimal Marathon stand-in answering every request with one canned response
pub struct StubMarathon {
    pub port: u16,
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubMarathon {
    pub fn serve(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub marathon");
        let port = listener.local_addr().expect("local addr").port();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let seen = Arc::clone(&requests);
        let response = format!(
            "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { continue };
                let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

                let mut request_line = String::new();
                if reader.read_line(&mut request_line).is_err() {
                    continue;
                }
                // Drain headers
                let mut line = String::new();
                while reader.read_line(&mut line).is_ok_and(|n| n > 0) && line != "\r\n" {
                    line.clear();
                }

                seen.lock().unwrap().push(request_line.trim_end().to_string());
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self { port, requests }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Write a DC/OS CLI config pointing at `port` on localhost
pub fn write_dcos_config(dir: &Path, port: u16) -> PathBuf {
    let path = dir.join("dcos.toml");
    std::fs::write(
        &path,
        format!("[core]\nreporting = false\n\n[marathon]\nhost = \"127.0.0.1\"\nport = {port}\n"),
    )
    .expect("write dcos config");
    path
}

pub fn app_json(host: &str, ports: &[u16]) -> String {
    let ports = ports
        .iter()
        .map(u16::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        r#"{{"app": {{"id": "/kafka", "tasks": [{{"id": "kafka.abc", "host": "{host}", "ports": [{ports}]}}]}}}}"#
    )
}

/// Fake `java` that prints what kafka-mesos would need and exits with `code`
#[cfg(unix)]
pub fn install_fake_java(dir: &Path, code: i32) -> PathBuf {
    let script = format!(
        "#!/bin/sh\n\
         echo \"args=$*\"\n\
         echo \"KM_API=${{KM_API-unset}}\"\n\
         echo \"KM_NO_SCHEDULER=${{KM_NO_SCHEDULER-unset}}\"\n\
         echo \"JAVA_HOME=${{JAVA_HOME-unset}}\"\n\
         echo \"kafka-mesos diagnostics\" >&2\n\
         exit {code}\n"
    );
    install_java_script(dir, &script)
}

/// Install `script` as `<dir>/jdk/bin/java`; returns the JAVA_HOME to use
#[cfg(unix)]
pub fn install_java_script(dir: &Path, script: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let bin = dir.join("jdk").join("bin");
    std::fs::create_dir_all(&bin).expect("create jdk dir");
    let java = bin.join("java");
    std::fs::write(&java, script).expect("write fake java");
    std::fs::set_permissions(&java, std::fs::Permissions::from_mode(0o755))
        .expect("chmod fake java");
    dir.join("jdk")
}

pub fn install_jar(dir: &Path) -> PathBuf {
    let jar = dir.join("kafka-mesos-0.9.2.0.jar");
    std::fs::write(&jar, b"PK").expect("write jar");
    jar
}
