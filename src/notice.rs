//! Transient pop-up messages ("toasts").

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub level: ToastLevel,
    pub message: String,
    pub expires_at_ms: u64,
}

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        level: ToastLevel,
        message: impl Into<String>,
        now_ms: u64,
        lifetime_ms: u64,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
            expires_at_ms: now_ms.saturating_add(lifetime_ms),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Drop every toast whose lifetime has run out. Returns how many went.
    pub fn expire(&mut self, now_ms: u64) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.expires_at_ms > now_ms);
        before - self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_their_lifetime() {
        let mut q = ToastQueue::new();
        q.push(ToastLevel::Info, "one", 0, 3000);
        q.push(ToastLevel::Success, "two", 1000, 3000);
        assert_eq!(q.expire(2999), 0);
        assert_eq!(q.expire(3000), 1);
        assert_eq!(q.toasts()[0].message, "two");
        assert_eq!(q.expire(4000), 1);
        assert!(q.toasts().is_empty());
    }

    #[test]
    fn ids_are_unique_and_dismissable() {
        let mut q = ToastQueue::new();
        let a = q.push(ToastLevel::Info, "a", 0, 10);
        let b = q.push(ToastLevel::Error, "b", 0, 10);
        assert_ne!(a, b);
        q.dismiss(a);
        assert_eq!(q.toasts().len(), 1);
        assert_eq!(q.toasts()[0].id, b);
    }
}
