//! 管理员对目录的增删改
//!
//! 编辑按整元素替换，不做差异合并。

use tracing::info;

use super::Directory;
use crate::errors::{ErpError, Result};
use crate::models::{
    classes::{
        entities::{ClassLevel, Section},
        requests::ClassRequest,
    },
    common::ClassNumber,
    subjects::{entities::Subject, requests::SubjectRequest},
    teachers::{
        entities::{Assignment, Teacher},
        requests::TeacherRequest,
    },
};
use crate::utils::{new_id, validate::validate_email};

impl Directory {
    fn build_class(id: String, request: &ClassRequest) -> Result<ClassLevel> {
        let (number, names) = request.parse()?;
        let sections = names
            .into_iter()
            .map(|name| Section {
                id: format!("{id}{name}"),
                name,
            })
            .collect();
        Ok(ClassLevel {
            id,
            name: number.to_string(),
            sections,
        })
    }

    fn ensure_class_number_free(&self, class: &ClassLevel, except_id: Option<&str>) -> Result<()> {
        let taken = self
            .classes
            .iter()
            .any(|c| Some(c.id.as_str()) != except_id && c.name == class.name);
        if taken {
            return Err(ErpError::validation(format!(
                "Class {} already exists",
                class.name
            )));
        }
        Ok(())
    }

    pub fn add_class(&mut self, request: ClassRequest) -> Result<ClassLevel> {
        let class = Self::build_class(new_id("class"), &request)?;
        self.ensure_class_number_free(&class, None)?;
        self.classes.push(class.clone());
        info!("Class {} added with {} sections", class.name, class.sections.len());
        Ok(class)
    }

    pub fn update_class(&mut self, id: &str, request: ClassRequest) -> Result<ClassLevel> {
        let index = self
            .classes
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ErpError::not_found(format!("Class {id} not found")))?;
        let class = Self::build_class(id.to_string(), &request)?;
        self.ensure_class_number_free(&class, Some(id))?;
        self.classes[index] = class.clone();
        info!("Class {} updated", class.name);
        Ok(class)
    }

    pub fn delete_class(&mut self, id: &str) -> Result<ClassLevel> {
        let index = self
            .classes
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ErpError::not_found(format!("Class {id} not found")))?;
        let removed = self.classes.remove(index);
        info!("Class {} deleted", removed.name);
        Ok(removed)
    }

    fn build_subject(id: String, request: &SubjectRequest) -> Result<Subject> {
        let valid = request.parse()?;
        Ok(Subject {
            id,
            name: valid.name,
            code: valid.code,
            classes_applicable: valid.classes_applicable,
        })
    }

    pub fn add_subject(&mut self, request: SubjectRequest) -> Result<Subject> {
        let subject = Self::build_subject(new_id("subject"), &request)?;
        self.subjects.push(subject.clone());
        info!("Subject {} ({}) added", subject.name, subject.code);
        Ok(subject)
    }

    pub fn update_subject(&mut self, id: &str, request: SubjectRequest) -> Result<Subject> {
        let index = self
            .subjects
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| ErpError::not_found(format!("Subject {id} not found")))?;
        let subject = Self::build_subject(id.to_string(), &request)?;
        self.subjects[index] = subject.clone();
        info!("Subject {} updated", subject.id);
        Ok(subject)
    }

    pub fn delete_subject(&mut self, id: &str) -> Result<Subject> {
        let index = self
            .subjects
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| ErpError::not_found(format!("Subject {id} not found")))?;
        let removed = self.subjects.remove(index);
        info!("Subject {} deleted", removed.id);
        Ok(removed)
    }

    /// 班级存在且包含该分班
    pub fn ensure_class_section(
        &self,
        class_id: ClassNumber,
        section: &str,
    ) -> Result<&ClassLevel> {
        let class = self
            .class_by_number(class_id)
            .ok_or_else(|| ErpError::validation(format!("Class {class_id} does not exist")))?;
        if !class.has_section(section) {
            return Err(ErpError::validation(format!(
                "Class {class_id} has no section {section}"
            )));
        }
        Ok(class)
    }

    /// 科目存在且适用于该年级
    pub fn taught_subject(&self, subject_id: &str, class_id: ClassNumber) -> Result<&Subject> {
        match self.subject(subject_id) {
            Some(subject) if subject.applies_to(class_id) => Ok(subject),
            Some(subject) => Err(ErpError::validation(format!(
                "{} is not taught in class {}",
                subject.name, class_id
            ))),
            None => Err(ErpError::validation(format!("Unknown subject: {subject_id}"))),
        }
    }

    /// 分配必须指向已存在的班级、该班级的分班、以及适用于该年级的科目
    fn validate_assignment(&self, assignment: &Assignment) -> Result<()> {
        self.ensure_class_section(assignment.class_id, &assignment.section)?;
        self.taught_subject(&assignment.subject_id, assignment.class_id)?;
        Ok(())
    }

    fn validate_teacher_request(&self, request: &TeacherRequest) -> Result<()> {
        if request.name.trim().is_empty() {
            return Err(ErpError::validation("Teacher name is required"));
        }
        validate_email(request.email.trim()).map_err(ErpError::validation)?;
        if let Some(unknown) = request.subjects.iter().find(|id| self.subject(id).is_none()) {
            return Err(ErpError::validation(format!("Unknown subject: {unknown}")));
        }
        for (i, assignment) in request.class_assignments.iter().enumerate() {
            self.validate_assignment(assignment)?;
            if request.class_assignments[..i].contains(assignment) {
                return Err(ErpError::validation(format!(
                    "Duplicate assignment: class {} section {} subject {}",
                    assignment.class_id, assignment.section, assignment.subject_id
                )));
            }
        }
        Ok(())
    }

    pub fn add_teacher(&mut self, request: TeacherRequest) -> Result<Teacher> {
        self.validate_teacher_request(&request)?;
        let teacher = Teacher {
            id: new_id("teacher"),
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            subjects: request.subjects,
            classes: request.class_assignments,
            contact_number: request.contact_number,
            qualification: request.qualification,
            joining_date: chrono::Local::now().date_naive(),
            avatar: None,
        };
        self.teachers.push(teacher.clone());
        info!(
            "Teacher {} added with {} subjects and {} class assignments",
            teacher.name,
            teacher.subjects.len(),
            teacher.classes.len()
        );
        Ok(teacher)
    }

    pub fn update_teacher(&mut self, id: &str, request: TeacherRequest) -> Result<Teacher> {
        let index = self
            .teachers
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ErpError::not_found(format!("Teacher {id} not found")))?;
        self.validate_teacher_request(&request)?;

        let existing = &self.teachers[index];
        let teacher = Teacher {
            id: existing.id.clone(),
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            subjects: request.subjects,
            classes: request.class_assignments,
            contact_number: request.contact_number,
            qualification: request.qualification,
            joining_date: existing.joining_date,
            avatar: existing.avatar.clone(),
        };
        self.teachers[index] = teacher.clone();
        info!("Teacher {} updated", teacher.name);
        Ok(teacher)
    }

    pub fn delete_teacher(&mut self, id: &str) -> Result<Teacher> {
        let index = self
            .teachers
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ErpError::not_found(format!("Teacher {id} not found")))?;
        let removed = self.teachers.remove(index);
        info!("Teacher {} deleted", removed.name);
        Ok(removed)
    }
}
