use num_traits::Float;

/// A single pixel colour, three 8 bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorSample {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorSample {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        ColorSample { red, green, blue }
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for ColorSample {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        ColorSample { red, green, blue }
    }
}

/// Floating point colour used as an accumulator while smoothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSampleF<T> {
    pub red: T,
    pub green: T,
    pub blue: T,
}

impl<T: Float> ColorSampleF<T> {
    pub fn zero() -> Self {
        ColorSampleF { red: T::zero(), green: T::zero(), blue: T::zero() }
    }

    pub(crate) fn add_weighted(&mut self, weight: T, sample: &ColorSample) {
        self.red = self.red + weight * channel_to_float(sample.red);
        self.green = self.green + weight * channel_to_float(sample.green);
        self.blue = self.blue + weight * channel_to_float(sample.blue);
    }

    pub(crate) fn add_weighted_f(&mut self, weight: T, sample: &ColorSampleF<T>) {
        self.red = self.red + weight * sample.red;
        self.green = self.green + weight * sample.green;
        self.blue = self.blue + weight * sample.blue;
    }

    /// Truncates each channel toward zero, the way a plain numeric cast to a byte does.
    /// Out of range values are clamped and NaN becomes 0.
    pub fn truncate(&self) -> ColorSample {
        ColorSample {
            red: truncate_channel(self.red),
            green: truncate_channel(self.green),
            blue: truncate_channel(self.blue),
        }
    }
}

impl<T: Float> From<ColorSample> for ColorSampleF<T> {
    fn from(sample: ColorSample) -> Self {
        ColorSampleF {
            red: channel_to_float(sample.red),
            green: channel_to_float(sample.green),
            blue: channel_to_float(sample.blue),
        }
    }
}

pub(crate) fn channel_to_float<T: Float>(channel: u8) -> T {
    // Every u8 is representable in any Float
    T::from(channel).unwrap_or_else(T::zero)
}

fn truncate_channel<T: Float>(value: T) -> u8 {
    if value.is_nan() {
        return 0;
    }
    let max = channel_to_float::<T>(u8::MAX);
    value.max(T::zero()).min(max).to_u8().unwrap_or(0)
}
