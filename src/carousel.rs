/// Looping slide index for the banner and review carousels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, current: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && index == self.current
    }

    /// Advance one slide, wrapping to the first. An empty carousel stays put.
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
        self.current
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    pub text: &'static str,
    pub stars: u8,
    pub author: &'static str,
}

impl Review {
    /// Filled stars followed by empty ones, five in total.
    pub fn star_line(&self) -> String {
        let filled = usize::from(self.stars.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }

    pub fn byline(&self) -> String {
        format!("- {}", self.author)
    }
}

pub static REVIEWS: [Review; 10] = [
    Review {
        text: "Yahan ka pizza zabardast hai! Service bhi fast hai.",
        stars: 5,
        author: "Ali (Karachi)",
    },
    Review {
        text: "Best fries in town, must try! 😋",
        stars: 5,
        author: "Sara (Lahore)",
    },
    Review {
        text: "Burger ki quality bohat achi hai, fresh aur juicy.",
        stars: 4,
        author: "Usman (Islamabad)",
    },
    Review {
        text: "Loved the 3D look and fast delivery!",
        stars: 5,
        author: "Ayesha (Hyderabad)",
    },
    Review {
        text: "Ice cream bohat creamy thi, bachon ko bohat pasand aayi.",
        stars: 5,
        author: "Nida (Multan)",
    },
    Review {
        text: "Great food, friendly staff, aur rates bhi reasonable hain.",
        stars: 4,
        author: "Bilal (Faisalabad)",
    },
    Review {
        text: "Amazing experience! Will order again.",
        stars: 5,
        author: "Hina (Rawalpindi)",
    },
    Review {
        text: "Order thora late aya tha, lekin taste lajawab tha.",
        stars: 3,
        author: "Zeeshan (Sukkur)",
    },
    Review {
        text: "Sandwich fresh tha aur packing bhi achi thi.",
        stars: 4,
        author: "Farah (Peshawar)",
    },
    Review {
        text: "Superb! Highly recommended for fast food lovers.",
        stars: 5,
        author: "Imran (Quetta)",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_after_the_last_slide() {
        let mut c = Carousel::new(3);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
        assert!(c.is_active(0));
        assert!(!c.is_active(1));
    }

    #[test]
    fn empty_carousel_does_not_panic() {
        let mut c = Carousel::new(0);
        assert_eq!(c.next(), 0);
        assert!(!c.is_active(0));
    }

    #[test]
    fn stars_always_total_five() {
        for r in REVIEWS.iter() {
            assert_eq!(r.star_line().chars().count(), 5);
        }
        let three = REVIEWS.iter().find(|r| r.stars == 3).unwrap();
        assert_eq!(three.star_line(), "★★★☆☆");
        assert_eq!(three.byline(), "- Zeeshan (Sukkur)");
    }
}
