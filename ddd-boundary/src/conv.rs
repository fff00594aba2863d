use super::*;
use ddd_entities as e;

impl From<e::registration::Registration> for SignupRequest {
    fn from(from: e::registration::Registration) -> Self {
        let e::registration::Registration {
            name,
            phone,
            conference,
        } = from;
        Self {
            name,
            phone,
            conference: conference.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_to_request() {
        let req = SignupRequest::from(e::registration::Registration {
            name: "Ada".into(),
            phone: "0123".into(),
            conference: "ddd-east-anglia".into(),
        });
        assert_eq!(req.conference, "ddd-east-anglia");
        assert_eq!(req.name, "Ada");
    }
}
