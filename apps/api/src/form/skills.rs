/// Ordered, case-insensitively unique list of skills.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillSet {
    skills: Vec<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trims the input and appends it unless it is empty or already present
    /// under any casing. The first spelling wins. Returns whether it was added.
    pub fn add(&mut self, raw: &str) -> bool {
        let skill = raw.trim();
        if skill.is_empty() || self.contains(skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        (index < self.skills.len()).then(|| self.skills.remove(index))
    }

    pub fn contains(&self, skill: &str) -> bool {
        let needle = skill.trim().to_lowercase();
        self.skills.iter().any(|s| s.to_lowercase() == needle)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }

    pub fn into_vec(self) -> Vec<String> {
        self.skills
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        for skill in iter {
            set.add(skill.as_ref());
        }
        set
    }
}
