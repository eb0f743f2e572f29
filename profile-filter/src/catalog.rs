use itertools::Itertools;

const JOB_TYPES: &[&str] = &["Full-time", "Part-time", "Contractor", "Internship"];

const JOB_CATEGORIES: &[&str] = &[
    "Restaurant and Hospitality",
    "Sales and Retail",
    "Education",
    "Admin and Office",
    "Healthcare",
    "Cleaning and Facilities",
    "Transportation and Logistics",
    "Manufacturing and Warehouse",
    "Customer Service",
    "Personal Care and Services",
    "Art, Fashion and Design",
    "Human Resources",
    "Advertising and Marketing",
    "Management",
    "Accounting and Finance",
    "Business Operations",
    "Protective Services",
    "Science and Engineering",
    "Animal Care",
    "Computer and IT",
    "Sports Fitness and Recreation",
    "Installation, Maintenance and Repair",
    "Legal",
    "Media, Communications and Writing",
    "Construction",
    "Entertainment and Travel",
    "Farming and Outdoors",
    "Energy and Mining",
    "Property",
    "Social Services and Non-Profit",
];

/// Job types offered on the filter form
pub fn job_types() -> Vec<&'static str> {
    JOB_TYPES.to_vec()
}

/// Job categories offered on the filter form, alphabetically sorted
pub fn job_categories() -> Vec<&'static str> {
    JOB_CATEGORIES.iter().copied().sorted().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_sorted() {
        let categories = job_categories();
        assert_eq!(categories.len(), 30);
        assert!(categories.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(categories[0], "Accounting and Finance");
    }

    #[test]
    fn four_job_types() {
        assert_eq!(job_types().len(), 4);
    }
}
