//! Whole-message encode and decode, RFC 1035 §4.1.

use super::errors::{DecodeFailure, EncodeFailure, WireError};
use super::header::{Header, MessageType, Opcode};
use super::question::Question;
use super::record::ResourceRecord;
use super::{WireDecode, WireEncode};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authority: Vec<ResourceRecord>,
    pub additional: Vec<ResourceRecord>,
    /// Round-trip time of the exchange that produced this message, for reporting.
    pub query_time: Option<Duration>,
    /// Bytes consumed by the decode that produced this message.
    pub bytes_read: usize,
}

impl Message {
    /// A standard query carrying a single question.
    pub fn query(id: u16, question: Question, recursion_desired: bool) -> Self {
        Self {
            header: Header {
                id,
                message_type: MessageType::Query,
                opcode: Opcode::Query,
                recursion_desired,
                question_count: 1,
                ..Header::default()
            },
            questions: vec![question],
            ..Self::default()
        }
    }

    pub fn with_query_time(mut self, query_time: Duration) -> Self {
        self.query_time = Some(query_time);
        self
    }

    /// Encodes header, questions, answers, authority and additional records
    /// in that order.
    ///
    /// The header counts are written as given; they are not recomputed from
    /// the section lengths.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeFailure> {
        let mut out = Vec::with_capacity(512);

        let entities = std::iter::once(&self.header as &dyn WireEncode)
            .chain(self.questions.iter().map(|q| q as &dyn WireEncode))
            .chain(self.answers.iter().map(|rr| rr as &dyn WireEncode))
            .chain(self.authority.iter().map(|rr| rr as &dyn WireEncode))
            .chain(self.additional.iter().map(|rr| rr as &dyn WireEncode));

        for entity in entities {
            match entity.encode() {
                Ok(bytes) => out.extend_from_slice(&bytes),
                Err(error) => {
                    return Err(EncodeFailure {
                        partial: out,
                        error,
                    })
                }
            }
        }

        Ok(out)
    }

    /// Decodes a complete message from the start of `buf`.
    ///
    /// The header counts are trusted as the number of entries in each
    /// section. Returns the message and the offset just past it.
    pub fn decode(buf: &[u8]) -> Result<(Self, usize), DecodeFailure> {
        Self::decode_at(buf, 0)
    }

    pub fn decode_at(buf: &[u8], offset: usize) -> Result<(Self, usize), DecodeFailure> {
        let (header, cursor) = Header::decode(buf, offset).map_err(|error| DecodeFailure {
            cursor: offset,
            error,
        })?;

        let (questions, cursor) = decode_section::<Question>(buf, cursor, header.question_count)?;
        let (answers, cursor) = decode_section::<ResourceRecord>(buf, cursor, header.answer_count)?;
        let (authority, cursor) =
            decode_section::<ResourceRecord>(buf, cursor, header.authority_count)?;
        let (additional, cursor) =
            decode_section::<ResourceRecord>(buf, cursor, header.additional_count)?;

        let message = Message {
            header,
            questions,
            answers,
            authority,
            additional,
            query_time: None,
            bytes_read: cursor - offset,
        };

        Ok((message, cursor))
    }

    /// Decodes into a caller-supplied slot, failing with
    /// [`WireError::NilTarget`] when there is none.
    pub fn decode_into(target: Option<&mut Message>, buf: &[u8]) -> Result<usize, DecodeFailure> {
        let target = target.ok_or(DecodeFailure {
            cursor: 0,
            error: WireError::NilTarget,
        })?;
        let (message, cursor) = Self::decode(buf)?;
        *target = message;
        Ok(cursor)
    }
}

fn decode_section<T: WireDecode>(
    buf: &[u8],
    mut cursor: usize,
    count: u16,
) -> Result<(Vec<T>, usize), DecodeFailure> {
    let mut entries = Vec::new();
    for _ in 0..count {
        let (entry, next) =
            T::decode(buf, cursor).map_err(|error| DecodeFailure { cursor, error })?;
        entries.push(entry);
        cursor = next;
    }
    Ok((entries, cursor))
}
