//! Per-child message envelopes used by batched programs.

/// A message paired with the index of the child program it belongs to.
///
/// [`batch_programs`](crate::batch_programs) tags everything a child emits
/// with that child's position, so two siblings can never confuse each other's
/// messages even when the payloads are identical. The batched program's
/// `update` routes on [`index`](Self::index) without looking at the payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tagged<Msg> {
    index: usize,
    payload: Msg,
}

impl<Msg> Tagged<Msg> {
    pub fn new(index: usize, payload: Msg) -> Self {
        Self { index, payload }
    }

    /// Position of the originating child within its batch.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn payload(&self) -> &Msg {
        &self.payload
    }

    /// Split the envelope back into its index and payload.
    pub fn into_parts(self) -> (usize, Msg) {
        (self.index, self.payload)
    }
}
