/// Items a [`Filter`] can narrow down.
pub trait Filterable {
    fn category(&self) -> Option<&str>;
    fn name(&self) -> Option<&str>;
}

impl Filterable for serde_json::Value {
    fn category(&self) -> Option<&str> {
        self.get("category").and_then(|v| v.as_str())
    }

    fn name(&self) -> Option<&str> {
        self.get("name").and_then(|v| v.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Category,
    Keyword,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// `"all"` disables the category filter.
    pub category: String,
    pub keyword: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: "all".to_string(),
            keyword: String::new(),
        }
    }
}

/// Client-side list filter that re-renders on every change.
pub struct Filter<T: Filterable> {
    items: Vec<T>,
    render: Box<dyn FnMut(&[&T])>,
    filters: FilterState,
}

impl<T: Filterable> Filter<T> {
    pub fn new(items: Vec<T>, render: impl FnMut(&[&T]) + 'static) -> Self {
        Self {
            items,
            render: Box::new(render),
            filters: FilterState::default(),
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_filter(&mut self, key: FilterKey, value: impl Into<String>) {
        match key {
            FilterKey::Category => self.filters.category = value.into(),
            FilterKey::Keyword => self.filters.keyword = value.into(),
        }
        self.update();
    }

    pub fn filtered(&self) -> Vec<&T> {
        apply_filters(&self.items, &self.filters)
    }

    pub fn update(&mut self) {
        let Self {
            items,
            render,
            filters,
        } = self;
        let visible = apply_filters(items, filters);
        render(&visible);
    }
}

/// Category must match exactly; the keyword is a case-insensitive
/// substring of the name. Items without a name never match a keyword.
fn apply_filters<'a, T: Filterable>(items: &'a [T], filters: &FilterState) -> Vec<&'a T> {
    let keyword = filters.keyword.to_lowercase();
    items
        .iter()
        .filter(|item| filters.category == "all" || item.category() == Some(filters.category.as_str()))
        .filter(|item| {
            keyword.is_empty()
                || item
                    .name()
                    .is_some_and(|name| name.to_lowercase().contains(&keyword))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn products() -> Vec<serde_json::Value> {
        vec![
            json!({"name": "iPhone 15", "category": "phone"}),
            json!({"name": "Galaxy S24", "category": "phone"}),
            json!({"name": "MacBook Air", "category": "laptop"}),
            json!({"category": "laptop"}),
        ]
    }

    #[test]
    fn test_set_filter_rerenders() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut filter = Filter::new(products(), move |items: &[&serde_json::Value]| {
            sink.borrow_mut().push(items.len());
        });

        filter.set_filter(FilterKey::Category, "phone");
        filter.set_filter(FilterKey::Keyword, "GALAXY");
        filter.set_filter(FilterKey::Category, "all");
        filter.set_filter(FilterKey::Keyword, "a");

        assert_eq!(*seen.borrow(), vec![2, 1, 1, 2]);
    }

    #[test]
    fn test_defaults_show_everything() {
        let filter = Filter::new(products(), |_: &[&serde_json::Value]| {});
        assert_eq!(filter.filters(), &FilterState::default());
        assert_eq!(filter.filtered().len(), 4);
    }

    #[test]
    fn test_update_renders_current_selection() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let mut filter = Filter::new(products(), move |items: &[&serde_json::Value]| {
            let names = items
                .iter()
                .map(|item| item.name().unwrap_or("-").to_string())
                .collect::<Vec<_>>();
            sink.borrow_mut().push(names);
        });

        filter.update();
        filter.set_filter(FilterKey::Keyword, "book");

        let seen = seen.borrow();
        assert_eq!(seen[0].len(), 4);
        assert_eq!(seen[1], vec!["MacBook Air".to_string()]);
    }
}
