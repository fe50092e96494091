//! Minimal script construction used by coinbase inputs and standard outputs.

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_1: u8 = 0x51;
pub const OP_DUP: u8 = 0x76;
pub const OP_EQUAL: u8 = 0x87;
pub const OP_EQUALVERIFY: u8 = 0x88;
pub const OP_HASH160: u8 = 0xa9;
pub const OP_CHECKSIG: u8 = 0xac;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_opcode(mut self, opcode: u8) -> Self {
        self.script.push(opcode);
        self
    }

    /// Pushes an integer using the shortest form: `OP_0`, `OP_1NEGATE`,
    /// `OP_1`..`OP_16`, or a script-number data push.
    pub fn push_int(self, value: i64) -> Self {
        match value {
            0 => self.push_opcode(OP_0),
            -1 => self.push_opcode(OP_1NEGATE),
            1..=16 => self.push_opcode(OP_1 + (value as u8 - 1)),
            _ => self.push_script_num(value),
        }
    }

    /// Pushes `value` as script-number bytes, even when an opcode form exists.
    pub fn push_script_num(self, value: i64) -> Self {
        self.push_slice(&script_num_to_vec(value))
    }

    pub fn push_slice(mut self, data: &[u8]) -> Self {
        push_data(&mut self.script, data);
        self
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.script
    }
}

pub fn push_data(script: &mut Vec<u8>, data: &[u8]) {
    match data.len() {
        0..=75 => script.push(data.len() as u8),
        76..=0xff => {
            script.push(OP_PUSHDATA1);
            script.push(data.len() as u8);
        }
        0x100..=0xffff => {
            script.push(OP_PUSHDATA2);
            script.extend_from_slice(&(data.len() as u16).to_le_bytes());
        }
        _ => {
            script.push(OP_PUSHDATA4);
            script.extend_from_slice(&(data.len() as u32).to_le_bytes());
        }
    }
    script.extend_from_slice(data);
}

/// Minimal little-endian sign-magnitude encoding.
pub fn script_num_to_vec(value: i64) -> Vec<u8> {
    if value == 0 {
        return Vec::new();
    }
    let mut abs = value.unsigned_abs();
    let mut result = Vec::new();
    while abs > 0 {
        result.push((abs & 0xff) as u8);
        abs >>= 8;
    }
    let sign_bit = 0x80u8;
    if let Some(last) = result.last_mut() {
        if (*last & sign_bit) != 0 {
            result.push(if value < 0 { sign_bit } else { 0 });
        } else if value < 0 {
            *last |= sign_bit;
        }
    }
    result
}

pub fn p2pkh_script(hash: &[u8; 20]) -> Vec<u8> {
    ScriptBuilder::new()
        .push_opcode(OP_DUP)
        .push_opcode(OP_HASH160)
        .push_slice(hash)
        .push_opcode(OP_EQUALVERIFY)
        .push_opcode(OP_CHECKSIG)
        .into_bytes()
}

pub fn p2sh_script(hash: &[u8; 20]) -> Vec<u8> {
    ScriptBuilder::new()
        .push_opcode(OP_HASH160)
        .push_slice(hash)
        .push_opcode(OP_EQUAL)
        .into_bytes()
}

pub fn p2pkh_hash(script: &[u8]) -> Option<[u8; 20]> {
    let matches = script.len() == 25
        && script[0] == OP_DUP
        && script[1] == OP_HASH160
        && script[2] == 0x14
        && script[23] == OP_EQUALVERIFY
        && script[24] == OP_CHECKSIG;
    matches.then(|| script[3..23].try_into().expect("20-byte slice"))
}

pub fn p2sh_hash(script: &[u8]) -> Option<[u8; 20]> {
    let matches =
        script.len() == 23 && script[0] == OP_HASH160 && script[1] == 0x14 && script[22] == OP_EQUAL;
    matches.then(|| script[2..22].try_into().expect("20-byte slice"))
}
