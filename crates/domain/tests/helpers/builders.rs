/// Encodes a dotted name as uncompressed labels, without validation.
pub fn name_bytes(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.trim_end_matches('.').split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}

/// Assembles raw response bytes section by section so tests can craft both
/// well-formed and hostile messages.
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    counts: [u16; 4],
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            flags: 0x8180,
            counts: [0; 4],
            body: Vec::new(),
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    /// Overrides the header counts, e.g. to make them lie.
    pub fn counts(mut self, qd: u16, an: u16, ns: u16, ar: u16) -> Self {
        self.counts = [qd, an, ns, ar];
        self
    }

    /// Offset the next appended byte will land at.
    pub fn offset(&self) -> usize {
        12 + self.body.len()
    }

    pub fn question(mut self, name: &[u8], qtype: u16) -> Self {
        self.body.extend_from_slice(name);
        self.body.extend_from_slice(&qtype.to_be_bytes());
        self.body.extend_from_slice(&1u16.to_be_bytes());
        self.counts[0] += 1;
        self
    }

    pub fn answer(self, name: &[u8], rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.record(1, name, rtype, ttl, rdata)
    }

    pub fn authority(self, name: &[u8], rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.record(2, name, rtype, ttl, rdata)
    }

    pub fn additional(self, name: &[u8], rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.record(3, name, rtype, ttl, rdata)
    }

    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    fn record(mut self, section: usize, name: &[u8], rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.body.extend_from_slice(name);
        self.body.extend_from_slice(&rtype.to_be_bytes());
        self.body.extend_from_slice(&1u16.to_be_bytes());
        self.body.extend_from_slice(&ttl.to_be_bytes());
        self.body.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        self.body.extend_from_slice(rdata);
        self.counts[section] += 1;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(12 + self.body.len());
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        for count in self.counts {
            out.extend_from_slice(&count.to_be_bytes());
        }
        out.extend_from_slice(&self.body);
        out
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        Self::new()
    }
}
