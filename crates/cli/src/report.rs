//! dig-style rendering of a decoded response.

use chrono::{DateTime, FixedOffset};
use dnsprobe_domain::{Message, RecordType, ResourceRecord};
use std::fmt::Write;
use std::net::SocketAddr;

pub struct Report<'a> {
    pub domain: &'a str,
    pub record_type: RecordType,
    pub server: SocketAddr,
    pub when: DateTime<FixedOffset>,
    pub response: &'a Message,
}

impl Report<'_> {
    pub fn render(&self) -> String {
        let mut out = String::new();
        let header = &self.response.header;

        let _ = write!(
            out,
            "\n; <<>> dnsprobe {} <<>> {} {}",
            env!("CARGO_PKG_VERSION"),
            self.domain,
            self.record_type
        );
        let _ = write!(
            out,
            "\n;; ->>HEADER<<- opcode: {}, status: {}, id: {}",
            header.opcode, header.response_code, header.id
        );
        let _ = write!(out, "\n;; flags:{}", flags(self.response));
        let _ = write!(
            out,
            "; QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}\n",
            self.response.questions.len(),
            self.response.answers.len(),
            self.response.authority.len(),
            self.response.additional.len()
        );

        if !self.response.questions.is_empty() {
            out.push_str("\n;; QUESTION SECTION:\n");
            for question in &self.response.questions {
                let _ = writeln!(out, ";{}", question);
            }
        }

        write_section(&mut out, "ANSWER", &self.response.answers);
        write_section(&mut out, "AUTHORITY", &self.response.authority);
        write_section(&mut out, "ADDITIONAL", &self.response.additional);

        if let Some(query_time) = self.response.query_time {
            let _ = write!(out, "\n;; Query time: {} msec", query_time.as_millis());
        }
        let _ = write!(out, "\n;; SERVER: {}", self.server);
        let _ = write!(out, "\n;; WHEN: {}", self.when.to_rfc2822());
        let _ = write!(out, "\n;; MSG SIZE  rcvd: {}", self.response.bytes_read);
        out.push('\n');

        out
    }
}

fn write_section(out: &mut String, title: &str, records: &[ResourceRecord]) {
    if records.is_empty() {
        return;
    }
    let _ = write!(out, "\n;; {} SECTION:\n", title);
    for record in records {
        let _ = writeln!(out, "{}", record);
    }
}

fn flags(message: &Message) -> String {
    let header = &message.header;
    [
        (header.is_response(), "qr"),
        (header.authoritative, "aa"),
        (header.truncated, "tc"),
        (header.recursion_desired, "rd"),
        (header.recursion_available, "ra"),
    ]
    .iter()
    .filter(|(set, _)| *set)
    .fold(String::new(), |mut acc, (_, name)| {
        acc.push(' ');
        acc.push_str(name);
        acc
    })
}
