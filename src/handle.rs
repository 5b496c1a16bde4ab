use bytemuck::{Pod, Zeroable};
use std::fmt;

/// Opaque reference to an externally managed resource (context, queue,
/// device). Only the address is carried; it is never dereferenced here.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Handle(usize);

impl Handle {
    pub const NULL: Handle = Handle(0);

    /// Identity of a live value, for handle-like addresses of runtime objects.
    pub fn of<T>(value: &T) -> Self {
        Handle(value as *const T as usize)
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    pub fn addr(&self) -> usize {
        self.0
    }
}

impl From<usize> for Handle {
    fn from(addr: usize) -> Self {
        Handle(addr)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::Debug for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({:#x})", self.0)
    }
}
