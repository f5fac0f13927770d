#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterMap {
    WhoAmI = 0x0F,
    CtrlReg1 = 0x20,
    OutTemp = 0x26,
    StatusReg = 0x27,
    OutXL = 0x28,
}

/// Sub-address flag requesting register auto-increment on multi-byte reads
pub const AUTO_INCREMENT: u8 = 1 << 7;

/// Contiguous bit range inside an 8-bit register.
///
/// `start` is the most significant bit of the field, so a 2-bit field
/// occupying bits 7 and 6 is `BitField::new(7, 2)`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitField {
    start: u8,
    length: u8,
}

impl BitField {
    pub const fn new(start: u8, length: u8) -> Self {
        Self { start, length }
    }

    pub const fn bit(position: u8) -> Self {
        Self::new(position, 1)
    }

    /// Mask of the field in register position
    pub const fn mask(&self) -> u8 {
        (0xFF >> (8 - self.length)) << self.shift()
    }

    const fn shift(&self) -> u8 {
        self.start + 1 - self.length
    }

    /// Extract the right-aligned field value from a register byte
    pub const fn extract(&self, register: u8) -> u8 {
        (register & self.mask()) >> self.shift()
    }

    /// Replace the field inside `register` with `value`, leaving other bits untouched.
    /// Bits of `value` that do not fit the field are dropped.
    pub const fn insert(&self, register: u8, value: u8) -> u8 {
        (register & !self.mask()) | ((value << self.shift()) & self.mask())
    }
}

/// `CTRL_REG1` layout: `DR1 DR0 BW1 BW0 PD Zen Yen Xen`
pub mod ctrl_reg1 {
    use super::BitField;

    pub const DATA_RATE: BitField = BitField::new(7, 2);
    pub const BANDWIDTH: BitField = BitField::new(5, 2);
    pub const POWER_ON: BitField = BitField::bit(3);
    pub const Z_ENABLE: BitField = BitField::bit(2);
    pub const Y_ENABLE: BitField = BitField::bit(1);
    pub const X_ENABLE: BitField = BitField::bit(0);
}

/// `STATUS_REG` new XYZ data available flag
pub const STATUS_ZYXDA: BitField = BitField::bit(3);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataOutputRate {
    Hz100 = 0b00,
    Hz200 = 0b01,
    Hz400 = 0b10,
    Hz800 = 0b11,
}

impl DataOutputRate {
    /// Any rate other than 100, 200 or 400 Hz selects 800 Hz
    pub const fn from_hz(rate: u16) -> Self {
        match rate {
            100 => Self::Hz100,
            200 => Self::Hz200,
            400 => Self::Hz400,
            _ => Self::Hz800,
        }
    }

    /// Decode raw `DR` field, unknown codes decode as 800 Hz
    pub const fn from_bits(bits: u8) -> Self {
        match bits {
            0b00 => Self::Hz100,
            0b01 => Self::Hz200,
            0b10 => Self::Hz400,
            _ => Self::Hz800,
        }
    }

    pub const fn hz(&self) -> u16 {
        match self {
            Self::Hz100 => 100,
            Self::Hz200 => 200,
            Self::Hz400 => 400,
            Self::Hz800 => 800,
        }
    }
}

/// Low-pass cut-off selector. Its frequency depends on the data output rate,
/// see [`bandwidth_cut_off_hz`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BandwidthCutOffMode {
    Low = 0b00,
    MedLow = 0b01,
    MedHigh = 0b10,
    High = 0b11,
}

impl BandwidthCutOffMode {
    /// Decode raw `BW` field, unknown codes decode as `High`
    pub const fn from_bits(bits: u8) -> Self {
        match bits {
            0b00 => Self::Low,
            0b01 => Self::MedLow,
            0b10 => Self::MedHigh,
            _ => Self::High,
        }
    }
}

/// Cut-off frequencies in Hz, rows by data output rate, columns by bandwidth mode
const BANDWIDTH_CUT_OFF_TABLE: [[f32; 4]; 4] = [
    [12.5, 12.5, 25.0, 25.0],
    [12.5, 25.0, 50.0, 70.0],
    [20.0, 25.0, 50.0, 110.0],
    [30.0, 35.0, 50.0, 110.0],
];

/// Resolve raw `DR` and `BW` field values to the filter cut-off frequency in Hz.
///
/// Defined for every input: unknown rate codes use the 800 Hz row and
/// unknown mode codes use the `High` column.
pub const fn bandwidth_cut_off_hz(rate_bits: u8, mode_bits: u8) -> f32 {
    let rate = DataOutputRate::from_bits(rate_bits);
    let mode = BandwidthCutOffMode::from_bits(mode_bits);

    BANDWIDTH_CUT_OFF_TABLE[rate as usize][mode as usize]
}
