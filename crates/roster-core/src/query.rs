//! Search, sort, and aggregate reporting over employee records.

use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::RosterError;
use crate::record::Employee;

/// Sort keys accepted by `sort_employees`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    JoiningDate,
    Salary,
}

impl FromStr for SortKey {
    type Err = RosterError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "date" | "joining-date" | "joining_date" => Ok(Self::JoiningDate),
            "salary" => Ok(Self::Salary),
            other => Err(RosterError::Validation(format!(
                "unknown sort key {:?} (use id, name, date, or salary)",
                other
            ))),
        }
    }
}

/// Case-insensitive substring search over display id and name.
///
/// Returns every record whose display id or name contains `term`, in
/// store order. An empty term matches everything.
pub fn search(records: &[Employee], term: &str) -> Vec<Employee> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|employee| {
            employee.display_id().to_lowercase().contains(&needle)
                || employee.name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable sort by `key`.
///
/// Ties keep their original relative order in both directions; dates sort
/// chronologically, salaries numerically.
pub fn sort_employees(records: &mut [Employee], key: SortKey, descending: bool) {
    records.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Id => a.sequence_id.cmp(&b.sequence_id),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::JoiningDate => a.joining_date.cmp(&b.joining_date),
            SortKey::Salary => a.salary.total_cmp(&b.salary),
        };
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}

/// Per-department salary total and head count.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DepartmentTotals {
    pub total_salary: f64,
    pub count: usize,
}

/// Group records by department, summing salary and counting members.
///
/// Departments with no members never appear; records without a department
/// are not reported.
pub fn department_totals(records: &[Employee]) -> BTreeMap<String, DepartmentTotals> {
    let mut totals: BTreeMap<String, DepartmentTotals> = BTreeMap::new();
    for employee in records {
        let department = match &employee.department {
            Some(department) => department,
            None => continue,
        };
        let entry = totals.entry(department.clone()).or_default();
        entry.total_salary += employee.salary;
        entry.count += 1;
    }
    totals
}

/// The earliest and latest joiners, in that order.
///
/// Ties go to the record encountered first in store order. `None` when
/// there are no records.
pub fn extreme_by_date(records: &[Employee]) -> Option<(&Employee, &Employee)> {
    let mut iter = records.iter();
    let first = iter.next()?;
    let mut earliest = first;
    let mut latest = first;
    for employee in iter {
        if employee.joining_date < earliest.joining_date {
            earliest = employee;
        }
        if employee.joining_date > latest.joining_date {
            latest = employee;
        }
    }
    Some((earliest, latest))
}

/// The lowest- and highest-paid records, in that order.
///
/// Ties go to the record encountered first in store order. `None` when
/// there are no records.
pub fn extreme_by_salary(records: &[Employee]) -> Option<(&Employee, &Employee)> {
    let mut iter = records.iter();
    let first = iter.next()?;
    let mut lowest = first;
    let mut highest = first;
    for employee in iter {
        if employee.salary < lowest.salary {
            lowest = employee;
        }
        if employee.salary > highest.salary {
            highest = employee;
        }
    }
    Some((lowest, highest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn employee(sequence_id: u64, name: &str, date: (i32, u32, u32), salary: f64) -> Employee {
        Employee {
            sequence_id,
            name: name.to_string(),
            joining_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            salary,
            department: None,
        }
    }

    fn with_department(mut employee: Employee, department: &str) -> Employee {
        employee.department = Some(department.to_string());
        employee
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("salary".parse::<SortKey>().unwrap(), SortKey::Salary);
        assert_eq!("Date".parse::<SortKey>().unwrap(), SortKey::JoiningDate);
        assert!("height".parse::<SortKey>().is_err());
    }

    #[test]
    fn test_search_matches_id_and_name_substrings() {
        let records = vec![
            employee(1, "Ada Lovelace", (2020, 1, 1), 100.0),
            employee(2, "Grace Hopper", (2019, 6, 15), 200.0),
            employee(12, "Edsger Dijkstra", (2021, 3, 5), 300.0),
        ];

        let by_name = search(&records, "LOVE");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Ada Lovelace");

        // "e01" hits E012's display id and nothing else
        let by_id = search(&records, "e01");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].sequence_id, 12);

        assert_eq!(search(&records, "zzz").len(), 0);
        assert_eq!(search(&records, "  ").len(), 3);
    }

    #[test]
    fn test_sort_reverses_exactly_for_distinct_keys() {
        let mut ascending = vec![
            employee(1, "a", (2020, 1, 1), 300.0),
            employee(2, "b", (2020, 1, 1), 100.0),
            employee(3, "c", (2020, 1, 1), 200.0),
        ];
        let mut descending = ascending.clone();

        sort_employees(&mut ascending, SortKey::Salary, false);
        sort_employees(&mut descending, SortKey::Salary, true);

        let forward: Vec<u64> = ascending.iter().map(|e| e.sequence_id).collect();
        let backward: Vec<u64> = descending.iter().rev().map(|e| e.sequence_id).collect();
        assert_eq!(forward, vec![2, 3, 1]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_sort_keeps_store_order_for_ties_in_both_directions() {
        let records = vec![
            employee(1, "a", (2020, 1, 1), 100.0),
            employee(2, "b", (2020, 1, 1), 100.0),
            employee(3, "c", (2020, 1, 1), 50.0),
        ];

        let mut ascending = records.clone();
        sort_employees(&mut ascending, SortKey::Salary, false);
        let order: Vec<u64> = ascending.iter().map(|e| e.sequence_id).collect();
        assert_eq!(order, vec![3, 1, 2]);

        let mut descending = records;
        sort_employees(&mut descending, SortKey::Salary, true);
        let order: Vec<u64> = descending.iter().map(|e| e.sequence_id).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_date_is_chronological() {
        let mut records = vec![
            employee(1, "a", (2020, 2, 1), 0.0),
            employee(2, "b", (2019, 12, 31), 0.0),
        ];
        sort_employees(&mut records, SortKey::JoiningDate, false);
        assert_eq!(records[0].sequence_id, 2);
    }

    #[test]
    fn test_department_totals_sums_and_counts() {
        let records = vec![
            with_department(employee(1, "a", (2020, 1, 1), 100.0), "Eng"),
            with_department(employee(2, "b", (2020, 1, 1), 50.0), "Eng"),
            with_department(employee(3, "c", (2020, 1, 1), 80.0), "Sales"),
            employee(4, "d", (2020, 1, 1), 999.0),
        ];

        let totals = department_totals(&records);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals["Eng"].total_salary, 150.0);
        assert_eq!(totals["Eng"].count, 2);
        assert_eq!(totals["Sales"].total_salary, 80.0);
        assert_eq!(totals["Sales"].count, 1);
    }

    #[test]
    fn test_extreme_by_date_tie_break_is_store_order() {
        let records = vec![
            employee(1, "a", (2020, 1, 1), 0.0),
            employee(2, "b", (2019, 6, 15), 0.0),
            employee(3, "c", (2019, 6, 15), 0.0),
        ];

        let (earliest, latest) = extreme_by_date(&records).unwrap();
        assert_eq!(earliest.sequence_id, 2);
        assert_eq!(latest.sequence_id, 1);
    }

    #[test]
    fn test_extreme_by_salary_tie_break_is_store_order() {
        let records = vec![
            employee(1, "a", (2020, 1, 1), 500.0),
            employee(2, "b", (2020, 1, 1), 500.0),
            employee(3, "c", (2020, 1, 1), 100.0),
        ];

        let (lowest, highest) = extreme_by_salary(&records).unwrap();
        assert_eq!(lowest.sequence_id, 3);
        assert_eq!(highest.sequence_id, 1);
    }

    #[test]
    fn test_extremes_on_empty_are_none() {
        assert!(extreme_by_date(&[]).is_none());
        assert!(extreme_by_salary(&[]).is_none());
    }
}
