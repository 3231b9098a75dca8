// Conversions between domain entities and database models that cannot
// fail. Conversions that have to validate stored values live next to
// the repository implementations.

use ocdb_core::entities::*;

use super::models::*;

impl<'a> From<&'a Category> for NewCategory<'a> {
    fn from(from: &'a Category) -> Self {
        Self {
            id: from.id.as_str(),
            name: from.name.as_str(),
            description: from.description.as_deref(),
            color: from.color.as_str(),
            icon: from.icon.as_str(),
            parent_id: from.parent_id.as_ref().map(Id::as_str),
            created_at: from.created_at.as_millis(),
            deleted: from.deleted,
        }
    }
}

impl From<CategoryEntity> for Category {
    fn from(from: CategoryEntity) -> Self {
        let CategoryEntity {
            id,
            name,
            description,
            color,
            icon,
            parent_id,
            created_at,
            deleted,
        } = from;
        Self {
            id: id.into(),
            name,
            description,
            color,
            icon,
            parent_id: parent_id.map(Into::into),
            created_at: Timestamp::from_millis(created_at),
            deleted,
        }
    }
}

impl<'a> From<&'a City> for NewCity<'a> {
    fn from(from: &'a City) -> Self {
        Self {
            id: from.id.as_str(),
            name: from.name.as_str(),
            center_lat: from.center.lat.to_deg(),
            center_lng: from.center.lng.to_deg(),
            zoom: i16::from(from.zoom),
        }
    }
}

impl From<CityEntity> for City {
    fn from(from: CityEntity) -> Self {
        let CityEntity {
            id,
            name,
            center_lat,
            center_lng,
            zoom,
        } = from;
        Self {
            id: id.into(),
            name,
            center: MapPoint::from_lat_lng_deg(center_lat, center_lng),
            zoom: zoom as u8,
        }
    }
}

impl<'a> From<&'a Issue> for NewIssue<'a> {
    fn from(from: &'a Issue) -> Self {
        Self {
            id: from.id.as_str(),
            title: from.title.as_str(),
            description: from.description.as_str(),
            lat: from.position.lat.to_deg(),
            lng: from.position.lng.to_deg(),
            status: from.status as i16,
            view_count: from.view_count as i64,
            session_view_count: from.session_view_count as i64,
            vote_count: from.vote_count as i64,
            comment_count: from.comment_count as i64,
            share_count: from.share_count as i64,
            user_id: from.user_id.as_str(),
            category_id: from.category_id.as_str(),
            city_id: from.city_id.as_str(),
            created_at: from.created_at.as_millis(),
        }
    }
}

impl<'a> From<&'a User> for NewUser<'a> {
    fn from(from: &'a User) -> Self {
        let (provider_user_id, access_token) = match &from.federated {
            Some(identity) => (
                Some(identity.provider_user_id.as_str()),
                Some(identity.access_token.as_str()),
            ),
            None => (None, None),
        };
        Self {
            id: from.id.as_str(),
            username: from.username.as_str(),
            email: from.email.as_str(),
            password: from.password.as_ref().map(|password| password.as_ref()),
            provider_user_id,
            access_token,
            role: from.role as i16,
            active: from.active,
            city_id: from.city_id.as_ref().map(Id::as_str),
            first_name: from.first_name.as_deref(),
            last_name: from.last_name.as_deref(),
            website: from.website.as_deref(),
            about: from.about.as_deref(),
            locale: from.locale.as_str(),
            image_id: from.image_id.as_ref().map(Id::as_str),
            activation_nonce: from.activation_nonce.to_string(),
            created_at: from.created_at.as_millis(),
        }
    }
}

impl<'a> From<&'a Image> for NewImage<'a> {
    fn from(from: &'a Image) -> Self {
        Self {
            id: from.id.as_str(),
            issue_id: from.issue_id.as_ref().map(Id::as_str),
            file_name: from.file_name.as_str(),
            created_at: from.created_at.as_millis(),
        }
    }
}

impl From<ImageEntity> for Image {
    fn from(from: ImageEntity) -> Self {
        let ImageEntity {
            id,
            issue_id,
            file_name,
            created_at,
        } = from;
        Self {
            id: id.into(),
            issue_id: issue_id.map(Into::into),
            file_name,
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

impl<'a> From<&'a Comment> for NewComment<'a> {
    fn from(from: &'a Comment) -> Self {
        Self {
            id: from.id.as_str(),
            issue_id: from.issue_id.as_str(),
            user_id: from.user_id.as_str(),
            text: from.text.as_str(),
            created_at: from.created_at.as_millis(),
        }
    }
}

impl From<CommentEntity> for Comment {
    fn from(from: CommentEntity) -> Self {
        let CommentEntity {
            id,
            issue_id,
            user_id,
            text,
            created_at,
        } = from;
        Self {
            id: id.into(),
            issue_id: issue_id.into(),
            user_id: user_id.into(),
            text,
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

impl<'a> From<&'a Vote> for NewVote<'a> {
    fn from(from: &'a Vote) -> Self {
        Self {
            id: from.id.as_str(),
            user_id: from.user_id.as_str(),
            issue_id: from.issue_id.as_str(),
            created_at: from.created_at.as_millis(),
        }
    }
}

impl From<VoteEntity> for Vote {
    fn from(from: VoteEntity) -> Self {
        let VoteEntity {
            id,
            user_id,
            issue_id,
            created_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            issue_id: issue_id.into(),
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

impl<'a> From<&'a IssueFollow> for NewIssueFollow<'a> {
    fn from(from: &'a IssueFollow) -> Self {
        Self {
            id: from.id.as_str(),
            user_id: from.user_id.as_str(),
            issue_id: from.issue_id.as_str(),
            created_at: from.created_at.as_millis(),
        }
    }
}

impl From<IssueFollowEntity> for IssueFollow {
    fn from(from: IssueFollowEntity) -> Self {
        let IssueFollowEntity {
            id,
            user_id,
            issue_id,
            created_at,
        } = from;
        Self {
            id: id.into(),
            user_id: user_id.into(),
            issue_id: issue_id.into(),
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

impl<'a> From<&'a UserFollow> for NewUserFollow<'a> {
    fn from(from: &'a UserFollow) -> Self {
        Self {
            id: from.id.as_str(),
            follower_id: from.follower_id.as_str(),
            followed_id: from.followed_id.as_str(),
            created_at: from.created_at.as_millis(),
        }
    }
}

impl From<UserFollowEntity> for UserFollow {
    fn from(from: UserFollowEntity) -> Self {
        let UserFollowEntity {
            id,
            follower_id,
            followed_id,
            created_at,
        } = from;
        Self {
            id: id.into(),
            follower_id: follower_id.into(),
            followed_id: followed_id.into(),
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

impl<'a> From<&'a UniqueView> for NewUniqueView<'a> {
    fn from(from: &'a UniqueView) -> Self {
        Self {
            id: from.id.as_str(),
            issue_id: from.issue_id.as_str(),
            session: from.session.as_str(),
            viewed_at: from.viewed_at.as_millis(),
        }
    }
}

impl From<UniqueViewEntity> for UniqueView {
    fn from(from: UniqueViewEntity) -> Self {
        let UniqueViewEntity {
            id,
            issue_id,
            session,
            viewed_at,
        } = from;
        Self {
            id: id.into(),
            issue_id: issue_id.into(),
            session,
            viewed_at: Timestamp::from_millis(viewed_at),
        }
    }
}
